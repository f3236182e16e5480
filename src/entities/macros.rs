//! Macros for reducing boilerplate when defining entities

/// Implement [`Record`](crate::core::store::Record) for a struct with an
/// `id: String` field
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Dish {
///     pub id: String,
///     pub name: String,
/// }
///
/// impl_record!(Dish, "dish");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $kind:expr) => {
        impl $crate::core::store::Record for $type {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}
