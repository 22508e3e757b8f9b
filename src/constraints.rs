use std::fmt;

/// A caller-supplied final check. It may normalize the value it returns.
pub type ValidatorFn<T> = Box<dyn Fn(T) -> Result<T, String> + Send + Sync>;

/// Declarative rules for a single configuration value.
///
/// Fields are public so a constraint set can be written as a struct literal with
/// `..Default::default()`, or built up with the chaining methods:
///
/// ```ignore
/// let v = IntValidation::default().with_default(8080).greater_than(0).less_than(65536);
/// ```
///
/// Bounds are ANDed. A missing value resolves to `default` unless `required` is
/// set, and the default goes through the same checks as any other value.
pub struct Validation<T> {
    pub required: bool,
    pub default: T,
    /// When non-empty, the resolved value must be one of these.
    pub allowed_values: Vec<T>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal_to: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal_to: Option<T>,
    pub validator: Option<ValidatorFn<T>>,
}

pub type IntValidation = Validation<i64>;
pub type FloatValidation = Validation<f64>;
pub type BoolValidation = Validation<bool>;
pub type StringValidation = Validation<String>;

impl<T: Default> Default for Validation<T> {
    fn default() -> Self {
        Self {
            required: false,
            default: T::default(),
            allowed_values: Vec::new(),
            greater_than: None,
            greater_than_or_equal_to: None,
            less_than: None,
            less_than_or_equal_to: None,
            validator: None,
        }
    }
}

impl<T: Default> Validation<T> {
    /// A constraint set whose value must come from the source.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}

impl<T> Validation<T> {
    pub fn with_default(mut self, value: T) -> Self {
        self.default = value;
        self
    }

    pub fn allowed_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.allowed_values = values.into_iter().collect();
        self
    }

    pub fn greater_than(mut self, bound: T) -> Self {
        self.greater_than = Some(bound);
        self
    }

    pub fn greater_than_or_equal_to(mut self, bound: T) -> Self {
        self.greater_than_or_equal_to = Some(bound);
        self
    }

    pub fn less_than(mut self, bound: T) -> Self {
        self.less_than = Some(bound);
        self
    }

    pub fn less_than_or_equal_to(mut self, bound: T) -> Self {
        self.less_than_or_equal_to = Some(bound);
        self
    }

    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Result<T, String> + Send + Sync + 'static,
    {
        self.validator = Some(Box::new(f));
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for Validation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("required", &self.required)
            .field("default", &self.default)
            .field("allowed_values", &self.allowed_values)
            .field("greater_than", &self.greater_than)
            .field("greater_than_or_equal_to", &self.greater_than_or_equal_to)
            .field("less_than", &self.less_than)
            .field("less_than_or_equal_to", &self.less_than_or_equal_to)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
