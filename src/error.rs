use thiserror::Error;

//=====================================================================
// Errors raised by the estimator. Every failure is a domain violation
// detected before any sampling happens, so there is a single kind.
//=====================================================================
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShieldError {
    #[error("invalid argument: {parameter} = {value} ({constraint})")]
    InvalidArgument {
        parameter: &'static str,
        value: String,
        constraint: &'static str,
    },
}

impl ShieldError {
    pub fn invalid_argument(parameter: &'static str, value: impl ToString, constraint: &'static str) -> Self {
        ShieldError::InvalidArgument {
            parameter,
            value: value.to_string(),
            constraint,
        }
    }
}

// Domain checks shared by the estimator and the analytic reference
pub(crate) fn check_count(count: i64) -> Result<usize, ShieldError> {
    if count <= 0 {
        return Err(ShieldError::invalid_argument("count", count, "must be greater than 0"));
    }
    usize::try_from(count)
        .map_err(|_| ShieldError::invalid_argument("count", count, "must fit in the platform word size"))
}

pub(crate) fn check_thickness(thickness: f64) -> Result<f64, ShieldError> {
    if thickness.is_nan() || thickness < 0.0 {
        return Err(ShieldError::invalid_argument("thickness", thickness, "must be greater than or equal to 0"));
    }
    Ok(thickness)
}

pub(crate) fn check_mean_free_path(mean_free_path: f64) -> Result<f64, ShieldError> {
    if mean_free_path.is_nan() || mean_free_path <= 0.0 || mean_free_path.is_infinite() {
        return Err(ShieldError::invalid_argument(
            "mean_free_path",
            mean_free_path,
            "must be a finite number greater than 0",
        ));
    }
    Ok(mean_free_path)
}
