use serde_json::{Map, Value};

use nfcmod_core::element::{ATTRS_KEY, element};
use nfcmod_vocab::{android, android_attr, namespaced};

use crate::entry::FilterEntry;
use crate::schema::IntentFilter;

/// Render one filter as an `<intent-filter>` element stamped with the sentinel marker.
///
/// Layout:
/// - attributes: `android:autoVerify="true"` (only when set), `data-generated="true"`
/// - one `action` child, `android:name` namespaced by the filter's namespace
/// - one `data` child per data entry, attribute names prefixed `android:`
/// - one `category` child per category, namespaced `android.intent.category.`
///
/// Empty `data` / `category` lists are omitted rather than written as `[]`.
pub fn render_filter(filter: &IntentFilter) -> FilterEntry {
    let mut attrs = Map::new();
    if filter.auto_verify {
        attrs.insert(
            android::AUTO_VERIFY_ATTR.to_string(),
            Value::String("true".to_string()),
        );
    }
    attrs.insert(
        android::GENERATED_ATTR.to_string(),
        Value::String(android::GENERATED_VALUE.to_string()),
    );

    let mut node = Map::new();
    node.insert(ATTRS_KEY.to_string(), Value::Object(attrs));

    let action = namespaced(filter.namespace.prefix(), &filter.action);
    node.insert(
        android::ACTION.to_string(),
        Value::Array(vec![element([(android::NAME_ATTR, action)])]),
    );

    if !filter.data.is_empty() {
        let data = filter
            .data
            .iter()
            .map(|d| element(d.attrs.iter().map(|(k, v)| (android_attr(k), v.clone()))))
            .collect();
        node.insert(android::DATA.to_string(), Value::Array(data));
    }

    if !filter.categories.is_empty() {
        let categories = filter
            .categories
            .iter()
            .map(|c| {
                element([(
                    android::NAME_ATTR,
                    namespaced(android::INTENT_CATEGORY_PREFIX, c),
                )])
            })
            .collect();
        node.insert(android::CATEGORY.to_string(), Value::Array(categories));
    }

    FilterEntry::Generated(Value::Object(node))
}

/// Render a batch of filters, preserving input order.
pub fn render_filters(filters: &[IntentFilter]) -> Vec<FilterEntry> {
    filters.iter().map(render_filter).collect()
}
