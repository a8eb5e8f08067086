use std::fmt;

/// One exported function declaration recognized in a header.
///
/// The return type is kept exactly as captured; whitespace is normalized
/// when the declaration is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub return_type: String,
    pub params_raw: String,
}

/// One decomposed (name, type) parameter pair.
///
/// `name` is empty when no trailing identifier could be found in the
/// parameter fragment. That is a degraded result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "({})", self.ty)
        } else {
            write!(f, "{} ({})", self.name, self.ty)
        }
    }
}
