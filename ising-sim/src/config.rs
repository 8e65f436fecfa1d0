use validator::{Validate, ValidationError};

fn validate_sample_config(cfg: &SampleConfig) -> Result<(), ValidationError> {
    if cfg.n_sweeps < 1 {
        return Err(ValidationError::new("n_sweeps must be >= 1"));
    }
    if cfg.warmup_sweeps > cfg.n_sweeps {
        return Err(ValidationError::new("warmup_sweeps must be <= n_sweeps"));
    }
    Ok(())
}

/// Sampling schedule: total sweep count and the leading warmup window
/// discarded before observables are recorded.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_sample_config"))]
pub struct SampleConfig {
    pub n_sweeps: usize,
    pub warmup_sweeps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_validation() {
        assert!(SampleConfig {
            n_sweeps: 100,
            warmup_sweeps: 20,
        }
        .validate()
        .is_ok());

        assert!(SampleConfig {
            n_sweeps: 0,
            warmup_sweeps: 0,
        }
        .validate()
        .is_err());

        assert!(SampleConfig {
            n_sweeps: 10,
            warmup_sweeps: 11,
        }
        .validate()
        .is_err());
    }
}
