//! Correlation labels linking a body to its visual element

use crate::core::random;

pub const ITEM_LABEL_PREFIX: &str = "gravity-item-";
const LABEL_SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const FLOOR: &str = "floor";
pub const CEILING: &str = "ceiling";
pub const LEFT_WALL: &str = "left";
pub const RIGHT_WALL: &str = "right";

/// Fresh `gravity-item-xxxxxxxxx` label. Uniqueness within a world is the
/// caller's job (see `WorldHandle::add_item_body`).
pub fn generate_item_label() -> String {
    let mut label = String::with_capacity(ITEM_LABEL_PREFIX.len() + LABEL_SUFFIX_LEN);
    label.push_str(ITEM_LABEL_PREFIX);
    for _ in 0..LABEL_SUFFIX_LEN {
        let idx = (random::next_u32() % 36) as usize;
        label.push(BASE36[idx] as char);
    }
    label
}

pub fn is_item_label(label: &str) -> bool {
    label.starts_with(ITEM_LABEL_PREFIX)
}
