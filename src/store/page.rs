//! Paginated id lists keyed by route path or explicit result key.

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

/// Cursor metadata of the most recent response for a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_last_page: Option<bool>,
}

impl Pagination {
    /// Whether the request asked for results after a `before` cursor,
    /// i.e. it continues an existing list rather than (re)loading its head.
    pub fn continues_list(&self) -> bool {
        match self.variables.as_ref().and_then(|vars| vars.get("before")) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(cursor)) => !cursor.is_empty(),
            Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
            Some(_) => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ids: IndexSet<String>,
    pub pagination: Pagination,
}

impl Page {
    /// Fold one response into the page.
    ///
    /// Pagination metadata is replaced by the incoming cursor. Ids follow the
    /// ordering rule: an empty page takes the new ids as-is, a continuation
    /// (`before` set) appends them, and a head reload prepends them. Ids
    /// already on the page keep their position.
    pub fn absorb(&mut self, ids: Vec<String>, pagination: Pagination) {
        let append = pagination.continues_list();
        self.pagination = pagination;
        self.ids = order_ids(std::mem::take(&mut self.ids), ids, append);
    }

    /// Register a complete, single-shot result list.
    pub fn register_complete(&mut self, ids: Vec<String>) {
        self.ids.extend(ids);
        self.pagination.is_last_page = Some(true);
    }
}

fn order_ids(existing: IndexSet<String>, incoming: Vec<String>, append: bool) -> IndexSet<String> {
    if existing.is_empty() {
        return incoming.into_iter().collect();
    }
    if append {
        let mut ids = existing;
        ids.extend(incoming);
        ids
    } else {
        let mut ids: IndexSet<String> = incoming.into_iter().collect();
        ids.extend(existing);
        ids
    }
}
