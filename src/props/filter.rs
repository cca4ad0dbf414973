//! DOM prop filtering.
//!
//! Components receive arbitrary props, but only a few of them may be
//! forwarded to the element they render: the id, labelling attributes,
//! `data-*` attributes, and whatever the component explicitly allows.

use std::collections::HashSet;

use super::{names, ElementProps};

/// Props allowed on any element.
const DOM_PROP_NAMES: &[&str] = &[names::ID];

/// Labelling props, allowed when [`FilterOptions::labelable`] is set.
const LABELABLE_PROP_NAMES: &[&str] = &[
    names::ARIA_LABEL,
    names::ARIA_LABELLEDBY,
    names::ARIA_DESCRIBEDBY,
    names::ARIA_DETAILS,
];

const DATA_ATTR_PREFIX: &str = "data-";

/// What [`filter_dom_props`] lets through besides `id` and `data-*`.
#[derive(Clone, Debug, Default)]
pub struct FilterOptions {
    /// Keep labelling aria props.
    pub labelable: bool,
    /// Extra prop names to keep.
    pub prop_names: Option<HashSet<String>>,
}

impl FilterOptions {
    pub fn labelable() -> Self {
        Self {
            labelable: true,
            prop_names: None,
        }
    }

    /// Allow `names` in addition to the defaults.
    pub fn with_prop_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prop_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn allows(&self, name: &str) -> bool {
        DOM_PROP_NAMES.contains(&name)
            || (self.labelable && LABELABLE_PROP_NAMES.contains(&name))
            || self.prop_names.as_ref().is_some_and(|names| names.contains(name))
            || name.starts_with(DATA_ATTR_PREFIX)
    }
}

/// Keep only the props `options` allows, in their original order.
pub fn filter_dom_props(props: &ElementProps, options: &FilterOptions) -> ElementProps {
    props
        .iter()
        .filter(|(name, _)| options.allows(name))
        .map(|(name, prop)| (name, prop.clone()))
        .collect()
}
