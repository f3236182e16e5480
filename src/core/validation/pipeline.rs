//! Ordered validation pipelines
//!
//! A [`Pipeline`] is a named, ordered list of checks run against a
//! [`RequestContext`]. The first failing check ends the run and its error is
//! returned unchanged; later checks are not evaluated.

use crate::core::error::{ApiError, ApiResult};
use serde_json::Value;

static MISSING: Value = Value::Null;

/// Everything a check may look at for one request
pub struct RequestContext<'a, R> {
    /// Identifier taken from the route, if the route has one
    pub route_id: Option<&'a str>,

    /// The `data` member of the request body
    pub data: &'a Value,

    /// Record resolved by the existence lookup, if the route has one
    pub record: Option<&'a R>,
}

impl<'a, R> RequestContext<'a, R> {
    /// Context for collection routes (no identifier, no stored record)
    pub fn collection(data: &'a Value) -> Self {
        Self {
            route_id: None,
            data,
            record: None,
        }
    }

    /// Context for member routes, after the existence lookup succeeded
    pub fn member(route_id: &'a str, data: &'a Value, record: &'a R) -> Self {
        Self {
            route_id: Some(route_id),
            data,
            record: Some(record),
        }
    }

    /// Field of the `data` object, `Null` when absent
    pub fn field(&self, name: &str) -> &'a Value {
        self.data.get(name).unwrap_or(&MISSING)
    }

    /// The stored record, required by state-transition checks
    pub fn stored(&self) -> ApiResult<&'a R> {
        self.record.ok_or_else(|| {
            ApiError::Internal("check requires a resolved record but none was attached".into())
        })
    }
}

type Check<R> = Box<dyn Fn(&RequestContext<'_, R>) -> ApiResult<()> + Send + Sync>;

struct Step<R> {
    name: &'static str,
    check: Check<R>,
}

/// Named, ordered sequence of checks with fail-fast execution
pub struct Pipeline<R> {
    name: &'static str,
    steps: Vec<Step<R>>,
}

impl<R> Pipeline<R> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a check; checks run in the order they are added
    pub fn check(
        mut self,
        name: &'static str,
        check: impl Fn(&RequestContext<'_, R>) -> ApiResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.steps.push(Step {
            name,
            check: Box::new(check),
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check names in execution order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name).collect()
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, ctx: &RequestContext<'_, R>) -> ApiResult<()> {
        for step in &self.steps {
            if let Err(err) = (step.check)(ctx) {
                tracing::debug!(
                    pipeline = self.name,
                    check = step.name,
                    error = %err,
                    "request rejected by validation"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
