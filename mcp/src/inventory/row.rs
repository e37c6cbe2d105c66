/// One projected inventory item: ordered `(label, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRow {
    fields: Vec<(&'static str, String)>,
}

impl SummaryRow {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(l, _)| *l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(l, v)| (*l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
