// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in subtree templates.
//!
//! Each template is a complete wire document (see [`crate::wire`]) for a
//! commonly rebuilt piece of character AI, loadable by name through
//! [`TreeStore::load_template`](crate::store::TreeStore::load_template).

/// Names of the built-in templates, in palette order
pub const TEMPLATE_NAMES: &[&str] = &["Target", "MemSpell"];

/// Acquire-and-verify-target subtree: keep the current target if it is
/// correct, otherwise validate and retarget.
const TARGET: &str = r#"{"id":"node-000","type":"SelectNode","inputs":{"name":"Target"},"children":[{"id":"node-001","type":"ConditionNode","inputs":{"name":"Have Target","conditionKey":"haveCorrectTarget","paramKeys":["targetId"]},"children":[]},{"id":"node-002","type":"SequenceNode","inputs":{"name":"Get Target"},"children":[{"id":"node-003","type":"ConditionNode","inputs":{"name":"Target Is Valid","conditionKey":"isValidTarget","paramKeys":["targetId","spawnType"]},"children":[]},{"id":"node-004","type":"TargetNode","inputs":{"name":"Target","targetIdKey":"targetId","targetTypeKey":"spawnType"},"children":[]}]}]}"#;

/// Spell-memorization subtree: start memorizing when the spell is neither
/// memorized nor in progress, then wait for the gem to finish.
const MEM_SPELL: &str = r#"{"id":"node-000","type":"SelectNode","inputs":{"name":"Root"},"children":[{"id":"node-001","type":"SequenceNode","inputs":{"name":"Start Mem"},"children":[{"id":"node-002","type":"InvertNode","inputs":{"name":"Not"},"children":[{"id":"node-003","type":"ConditionNode","inputs":{"name":"Memorizing","conditionKey":"spellMemorizing","paramKeys":[]},"children":[]}]},{"id":"node-004","type":"InvertNode","inputs":{"name":"Not"},"children":[{"id":"node-005","type":"ConditionNode","inputs":{"name":"Memorized","conditionKey":"spellMemorized","paramKeys":["spellId"]},"children":[]}]},{"id":"node-006","type":"MemorizeSpellNode","inputs":{"name":"Memorize Spell","spellGemKey":"spellGem","spellIdKey":"spellId"},"children":[]},{"id":"node-007","type":"WaitNode","inputs":{"name":"Wait","time":0.1,"paramKeys":[]},"children":[]}]},{"id":"node-008","type":"SequenceNode","inputs":{"name":"WaitingForMem"},"children":[{"id":"node-009","type":"ConditionNode","inputs":{"name":"Memorizing","conditionKey":"spellMemorizing","paramKeys":[]},"children":[]},{"id":"node-010","type":"InvertNode","inputs":{"name":"Not"},"children":[{"id":"node-011","type":"ConditionNode","inputs":{"name":"Memorized","conditionKey":"spellMemorized","paramKeys":["spellId"]},"children":[]}]},{"id":"node-012","type":"WaitNode","inputs":{"name":"Wait","time":0.1,"paramKeys":[]},"children":[]}]}]}"#;

/// Look up a built-in template document by name
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "Target" => Some(TARGET),
        "MemSpell" => Some(MEM_SPELL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireNode;

    #[test]
    fn test_every_template_parses() {
        for name in TEMPLATE_NAMES {
            let document = builtin(name).unwrap();
            let parsed: WireNode = serde_json::from_str(document).unwrap();
            assert!(parsed.node_count() > 1, "{name} is trivially small");
        }
    }

    #[test]
    fn test_template_sizes() {
        let target: WireNode = serde_json::from_str(builtin("Target").unwrap()).unwrap();
        assert_eq!(target.node_count(), 5);
        let mem_spell: WireNode = serde_json::from_str(builtin("MemSpell").unwrap()).unwrap();
        assert_eq!(mem_spell.node_count(), 13);
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert_eq!(builtin("Heal"), None);
    }

    #[test]
    fn test_template_condition_keys_are_known_to_the_runtime() {
        fn walk(node: &WireNode, keys: &mut Vec<String>) {
            if let Some(key) = node.inputs.get("conditionKey").and_then(|v| v.as_str()) {
                keys.push(key.to_string());
            }
            for child in &node.children {
                walk(child, keys);
            }
        }
        for name in TEMPLATE_NAMES {
            let parsed: WireNode = serde_json::from_str(builtin(name).unwrap()).unwrap();
            let mut keys = Vec::new();
            walk(&parsed, &mut keys);
            assert!(!keys.is_empty(), "{name} evaluates no conditions");
            for key in keys {
                assert!(
                    crate::catalog::CONDITION_KEYS.contains(&key.as_str()),
                    "{name} references unknown condition {key}"
                );
            }
        }
    }
}
