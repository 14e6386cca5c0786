use std::collections::BTreeSet;

/// All-of check: true if every one of `items` is carried.
pub fn carries_all(items: &[String], inventory: &BTreeSet<String>) -> bool {
    items.iter().all(|i| inventory.contains(i))
}

/// Any-of check: true if at least one of `items` is carried.
pub fn carries_any(items: &[String], inventory: &BTreeSet<String>) -> bool {
    items.iter().any(|i| inventory.contains(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn nothing_required_always_passes() {
        assert!(carries_all(&[], &inv(&[])));
    }

    #[test]
    fn every_required_item_must_be_carried() {
        let needed = vec!["key".to_string(), "lamp".to_string()];
        assert!(carries_all(&needed, &inv(&["key", "lamp", "sword"])));
        assert!(!carries_all(&needed, &inv(&["key"])));
        assert!(!carries_all(&needed, &inv(&[])));
    }

    #[test]
    fn any_of_weapons() {
        let weapons = vec!["sword".to_string(), "spell".to_string()];
        assert!(carries_any(&weapons, &inv(&["spell"])));
        assert!(!carries_any(&weapons, &inv(&["key"])));
        assert!(!carries_any(&[], &inv(&["sword"])));
    }
}
