// This file is used to generate the cosmetic redemption keys (and the ids of added items).

use rand::Rng;

/// Symbols a key character is drawn from.
pub const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of dash-separated groups in a key.
pub const KEY_GROUPS: usize = 3;

/// Characters per group.
pub const KEY_GROUP_LEN: usize = 4;

pub const KEY_SEPARATOR: char = '-';

/// Placeholder rendered for items that are still locked. Same grouping as a real key.
pub const LOCKED_KEY_MASK: &str = "••••-••••-••••";

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Generates a key like `X7K9-M2P4-R9L1` using the thread-local RNG.
pub fn generate_key() -> String {
    generate_key_with(&mut rand::thread_rng())
}

/// Generates a key from the given RNG.
///
/// Every character is drawn uniformly from [`KEY_ALPHABET`]. Nothing prevents two items from
/// receiving the same key; keys are decorative.
pub fn generate_key_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut key = String::with_capacity(KEY_GROUPS * (KEY_GROUP_LEN + 1));
    for group in 0..KEY_GROUPS {
        if group > 0 {
            key.push(KEY_SEPARATOR);
        }
        for _ in 0..KEY_GROUP_LEN {
            key.push(KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char);
        }
    }
    key
}

/// Returns true if `key` has exactly the shape produced by [`generate_key_with`].
pub fn is_well_formed_key(key: &str) -> bool {
    let groups: Vec<&str> = key.split(KEY_SEPARATOR).collect();
    groups.len() == KEY_GROUPS
        && groups.iter().all(|g| {
            g.len() == KEY_GROUP_LEN && g.bytes().all(|b| KEY_ALPHABET.contains(&b))
        })
}

/// Short lowercase base-36 id for items added at runtime.
pub fn generate_item_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_keys_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let key = generate_key_with(&mut rng);
            assert_eq!(key.len(), 14);
            assert!(is_well_formed_key(&key), "bad key {}", key);
        }
    }

    #[test]
    fn mask_and_key_share_grouping() {
        let mask_groups: Vec<usize> = LOCKED_KEY_MASK
            .split(KEY_SEPARATOR)
            .map(|g| g.chars().count())
            .collect();
        assert_eq!(mask_groups, vec![KEY_GROUP_LEN; KEY_GROUPS]);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(is_well_formed_key("X7K9-M2P4-R9L1"));
        assert!(!is_well_formed_key("x7k9-m2p4-r9l1"));
        assert!(!is_well_formed_key("X7K9-M2P4"));
        assert!(!is_well_formed_key("X7K9-M2P4-R9L1-AAAA"));
        assert!(!is_well_formed_key("X7K9M2P4R9L1"));
        assert!(!is_well_formed_key(""));
    }

    #[test]
    fn item_ids_are_base36() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = generate_item_id(&mut rng);
        assert_eq!(id.len(), 9);
        assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }
}
