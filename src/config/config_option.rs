use crate::types::err::ConfigError;

/// A configurable value, paired with a name and the bounds within which the value must fall.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        self.check_value(&value)?;
        self.value = value;
        Ok(())
    }

    /// Checks the current value is within bounds.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.check_value(&self.value)
    }

    fn check_value(&self, value: &T) -> Result<(), ConfigError> {
        match self.min <= *value && *value <= self.max {
            true => Ok(()),
            false => Err(ConfigError::OptionOutOfRange {
                name: self.name,
                value: format!("{value:?}"),
                min: format!("{:?}", self.min),
                max: format!("{:?}", self.max),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "option",
            min: 1,
            max: 4,
            value: 2,
        };
        assert!(option.set(4).is_ok());
        assert_eq!(option.value, 4);

        assert!(matches!(
            option.set(5),
            Err(ConfigError::OptionOutOfRange { name: "option", .. })
        ));
        assert_eq!(option.value, 4);
        assert_eq!(option.min_max(), (1, 4));
    }
}
