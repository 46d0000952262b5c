/// Reference to an indexed attribute used for geographic filtering.
///
/// The caller-visible name and the name actually stored in the index can
/// differ (dynamic-field schemes suffix the type onto the attribute name);
/// `sfield=` always receives the indexed name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    indexed_name: String,
}

impl Field {
    /// A field whose indexed name is the name itself.
    pub fn new<S: Into<String>>(name: S) -> Field {
        let name = name.into();
        Field {
            indexed_name: name.clone(),
            name,
        }
    }

    pub fn with_indexed_name<S, I>(name: S, indexed_name: I) -> Field
    where
        S: Into<String>,
        I: Into<String>,
    {
        Field {
            name: name.into(),
            indexed_name: indexed_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn indexed_name(&self) -> &str {
        &self.indexed_name
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Field {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Field {
        Field::new(name)
    }
}
