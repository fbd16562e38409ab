// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

use liquid_core::{
    Display_filter, Error, Filter, FilterReflection, ParseFilter, Result, Runtime, Value,
    ValueView,
};

/// Url prefix kept by [`PagesOnly`].
///
/// This is a raw string prefix: `/pagesfoo` matches as well as `/pages/foo`.
pub const PAGES_PREFIX: &str = "/pages";

pub trait HasUrl {
    fn url(&self) -> &str;
}

pub fn is_pages_url(url: &str) -> bool {
    url.starts_with(PAGES_PREFIX)
}

/// Keep the records under [`PAGES_PREFIX`], in their original order.
pub fn select_pages<'a, T, I>(records: I) -> Vec<&'a T>
where
    T: HasUrl + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().filter(|r| is_pages_url(r.url())).collect()
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "pages_only",
    description = "Selects the items of an array whose `url` starts with `/pages`.",
    parsed(PagesOnlyFilter)
)]
pub struct PagesOnly;

#[derive(Debug, Default, Display_filter)]
#[name = "pages_only"]
struct PagesOnlyFilter;

impl Filter for PagesOnlyFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        let array = input.as_array().ok_or_else(|| {
            invalid_input(format!("Array expected, found {}", input.type_name()))
        })?;

        let mut selected = Vec::new();
        for (index, item) in array.values().enumerate() {
            let url = item_url(item).ok_or_else(|| {
                invalid_input(format!("item {} has no `url` attribute", index))
            })?;
            if is_pages_url(url.as_str()) {
                selected.push(item.to_value());
            }
        }
        Ok(Value::Array(selected))
    }
}

fn item_url(item: &dyn ValueView) -> Option<liquid_core::model::KStringCow<'_>> {
    let url = item.as_object()?.get("url")?;
    if url.is_nil() || url.as_scalar().is_none() {
        return None;
    }
    Some(url.to_kstr())
}

fn invalid_input(cause: String) -> Error {
    Error::with_msg(format!("Invalid input: {}", cause))
}
