//! Pulls artifact records out of a user's inventory page.
//!
//! The page keeps every artifact in a `div` whose class starts with `item `,
//! with the record itself as JSON in the `data-json` attribute. Equipped
//! artifacts live under the `equipment` div of the `artifacts` element, the
//! rest under `inventory`.

use crate::{
    artifact::RawArtifactRecord,
    error::{Error, Result},
};

use html5ever::{parse_document, tendril::TendrilSink as _};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Equipment,
    Inventory,
}

impl Section {
    pub const fn new(equipped_only: bool) -> Self {
        if equipped_only {
            Self::Equipment
        } else {
            Self::Inventory
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Inventory => "inventory",
        }
    }
}

/// Returns the records of the chosen section, in page order.
pub fn records(page: &str, section: Section) -> Result<Vec<RawArtifactRecord>> {
    if page.contains(USER_NOT_FOUND) {
        return Err(Error::UserNotFound);
    }

    let dom = parse_document(RcDom::default(), Default::default()).one(page);

    let is_artifacts = |node: &Handle| attribute(node, "id").as_deref() == Some("artifacts");
    let artifacts = find(&dom.document, &is_artifacts).ok_or(Error::InventoryHidden)?;

    let is_section = |node: &Handle| is_div(node) && has_class(node, section.class());
    let html = match find(&artifacts, &is_section) {
        Some(html) => html,
        None => {
            log::warn!("no `{}` section on inventory page", section.class());
            return Ok(Vec::new());
        }
    };

    let mut items = Vec::new();
    find_all(&html, &is_item, &mut items);
    log::debug!("`{}` section has {} items", section.class(), items.len());

    let mut records = Vec::new();
    for item in &items {
        // attribute values come out of the tokenizer with entities decoded
        let json = match attribute(item, "data-json") {
            Some(json) if !json.is_empty() => json,
            _ => continue,
        };

        records.push(serde_json::from_str(&json)?);
    }

    Ok(records)
}

fn attribute(node: &Handle, name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn is_div(node: &Handle) -> bool {
    match node.data {
        NodeData::Element { ref name, .. } => &*name.local == "div",
        _ => false,
    }
}

fn has_class(node: &Handle, class: &str) -> bool {
    attribute(node, "class").map_or(false, |classes| {
        classes.split_whitespace().any(|c| c == class)
    })
}

fn is_item(node: &Handle) -> bool {
    is_div(node) && attribute(node, "class").map_or(false, |class| class.starts_with("item "))
}

/// First descendant of `node` in document order matching `pred`.
fn find(node: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if pred(child) {
            return Some(child.clone());
        }
        if let Some(found) = find(child, pred) {
            return Some(found);
        }
    }
    None
}

fn find_all(node: &Handle, pred: &dyn Fn(&Handle) -> bool, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if pred(child) {
            out.push(child.clone());
        }
        find_all(child, pred, out);
    }
}
