use metrics::{IntoLabels, Label, SharedString};

/// Holder of multiple [Label] attached to every metric a validator emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    pub fn empty() -> Self {
        NO_LABEL
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
