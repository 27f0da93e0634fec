// SPDX-License-Identifier: MIT OR Apache-2.0
//! The built-in node-type catalog.
//!
//! One schema per [`NodeType`] variant. The runtime's node set is fixed, so
//! the catalog is constructed rather than loaded; descriptions are the ones
//! surfaced in the editor's node palette.

use crate::node::{NodeCategory, NodeType};
use crate::schema::{InputDecl, InputType, NodeSchema, SchemaRegistry};

fn name_input(description: &str) -> InputDecl {
    InputDecl::new("name", InputType::String, description).with_display("Name")
}

/// Create the built-in schema registry covering every node type
pub fn create_builtin_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();

    // Composites
    registry.register(NodeSchema {
        node_type: NodeType::Sequence,
        category: NodeCategory::Composite,
        description: "The SequenceNode is a type of CompositeNode that processes its child \
                      nodes in order and succeeds only if all its children succeed. The node \
                      will return the first failure encountered, or success if all children \
                      succeed."
            .to_string(),
        inputs: vec![name_input(
            "The name of the node, used for identification and debugging.",
        )],
        can_have_children: true,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Select,
        category: NodeCategory::Composite,
        description: "The SelectNode is a type of CompositeNode that iterates through its \
                      children, returning the state of the first child that does not fail. It \
                      effectively selects the first successful path or action to take."
            .to_string(),
        inputs: vec![name_input(
            "The name of the node, used for identification and debugging.",
        )],
        can_have_children: true,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Parallel,
        category: NodeCategory::Composite,
        description: "The ParallelNode is a type of CompositeNode that executes its child \
                      nodes in 'parallel', evaluating their collective results based on a \
                      specified success percentage."
            .to_string(),
        inputs: vec![
            name_input("The name of the node, used for identification and debugging."),
            InputDecl::new(
                "percentage",
                InputType::Number,
                "The percentage of child nodes that need to succeed for this node to report \
                 success.",
            )
            .with_display("Percentage")
            .with_range(0.0, 100.0),
            InputDecl::new(
                "breakOnThreshold",
                InputType::String,
                "(Optional) Determines the condition under which to terminate early. Can be \
                 \"No\", \"SuccessOnly\", \"FailureOnly\", or \"Any\".",
            )
            .with_display("Break on threshold"),
        ],
        can_have_children: true,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::RandomSelector,
        category: NodeCategory::Composite,
        description: "The RandomSelector is a specialized type of SelectNode that shuffles \
                      its children and then proceeds like a regular SelectNode. It randomly \
                      picks one of the child nodes to execute first, providing a way to add \
                      variety or unpredictability to the behavior tree."
            .to_string(),
        inputs: vec![name_input(
            "The name of the node, used for identification and debugging.",
        )],
        can_have_children: true,
        is_decorator: false,
    });

    // Decorators
    registry.register(NodeSchema {
        node_type: NodeType::Invert,
        category: NodeCategory::Decorator,
        description: "The InvertNode is a type of DecoratorNode that inverts the result of \
                      its child node. It's used to reverse the success or failure of the \
                      child node's outcome."
            .to_string(),
        inputs: vec![name_input("The name of the Invert node.")],
        can_have_children: true,
        is_decorator: true,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Loop,
        category: NodeCategory::Decorator,
        description: "The LoopNode is a type of DecoratorNode designed to repeatedly execute \
                      its child node a specified number of times or until a condition is met."
            .to_string(),
        inputs: vec![
            name_input("The name of the Loop node."),
            InputDecl::new(
                "loopCount",
                InputType::Number,
                "The number of times to execute the child node.",
            )
            .with_display("Loop Count"),
            InputDecl::new(
                "conditionKey",
                InputType::Condition,
                "(Optional) A key to a condition function in the conditions table. This \
                 function should return a boolean value. If the function returns false, the \
                 loop will terminate early.",
            )
            .with_display("Condition Key"),
        ],
        can_have_children: true,
        is_decorator: true,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Repeat,
        category: NodeCategory::Decorator,
        description: "The RepeatNode is a type of DecoratorNode that repeats its child node \
                      a specified number of times or until the child node fails. It's useful \
                      for tasks that need to be attempted multiple times."
            .to_string(),
        inputs: vec![
            name_input("The name of the node, used for identification and debugging."),
            InputDecl::new(
                "repeatCount",
                InputType::Number,
                "The number of times to repeat the child node. If not specified, it defaults \
                 to 1.",
            )
            .with_display("Repeat Count"),
        ],
        can_have_children: true,
        is_decorator: true,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Retry,
        category: NodeCategory::Decorator,
        description: "The RetryNode is a type of DecoratorNode that retries its child node a \
                      specified number of times or until the child node succeeds. This node \
                      is used when an action might fail initially but could succeed upon \
                      subsequent attempts."
            .to_string(),
        inputs: vec![
            name_input("The name of the node, used for identification and debugging."),
            InputDecl::new(
                "repeatCount",
                InputType::Number,
                "The number of times to retry the child node. If not specified, it defaults \
                 to 1.",
            )
            .with_display("Repeat Count"),
        ],
        can_have_children: true,
        is_decorator: true,
    });

    // Actions
    registry.register(NodeSchema {
        node_type: NodeType::CastSpell,
        category: NodeCategory::Action,
        description: "The CastSpellNode is a specialized type of Node designed for casting \
                      spells, disciplines, items, and alternate abilities within a behavior \
                      tree."
            .to_string(),
        inputs: vec![
            name_input("The name of the node, used for identification and debugging."),
            InputDecl::new(
                "targetIdKey",
                InputType::String,
                "Key to extract the target ID (number|string) from the blackboard.",
            )
            .with_display("Target Id Key"),
            InputDecl::new(
                "targetTypeKey",
                InputType::String,
                "Key to extract the target type (string) from the blackboard.",
            )
            .with_display("Target Type Key"),
            InputDecl::new(
                "spellIdKey",
                InputType::String,
                "Key to extract the spell ID (number|string) from the blackboard.",
            )
            .with_display("Spell Id Key"),
            InputDecl::new(
                "spellKey",
                InputType::String,
                "Key to extract the actual Spell (userdata) from the blackboard.Spells table.",
            )
            .with_display("Spell Key"),
            InputDecl::new(
                "spellTypeKey",
                InputType::String,
                "Key to extract the spell type (string, e.g., \"Item\", \"AA\", \"Gem\", \
                 \"Disc\") from the blackboard.",
            )
            .with_display("Spell Type Key"),
            InputDecl::new(
                "spellType",
                InputType::String,
                "The spell type (\"Item\", \"AA\", \"Gem\", \"Disc\")",
            )
            .with_display("Spell Type"),
            InputDecl::new(
                "spellResultKey",
                InputType::String,
                "Key to place the result of the spell (string, e.g., \"Success\", \
                 \"Interrupt\", \"Fizzle\", \"Immune\", etc) in the blackboard.",
            )
            .with_display("Spell Result Key"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Ability,
        category: NodeCategory::Action,
        description: "The AbilityNode is a specialized type of Node designed for executing \
                      character abilities within a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the Ability node."),
            InputDecl::new(
                "abilityNameKey",
                InputType::String,
                "Key to extract the ability name (string) for the `/doability` command from \
                 the blackboard.",
            )
            .with_display("Ability Name Key"),
            InputDecl::new(
                "abilityName",
                InputType::String,
                "The ability name (string) for the `/doability` command; if provided it is \
                 used instead of `abilityNameKey`.",
            )
            .with_display("Ability Name"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Attack,
        category: NodeCategory::Action,
        description: "The AttackNode is a type of Node designed to manage and control attack \
                      commands within the game. It allows behavior trees to dynamically \
                      initiate or cease character attacks based on the current state and \
                      context."
            .to_string(),
        inputs: vec![
            name_input("The name of the attack node. Used for identification and debugging."),
            InputDecl::new(
                "desiredStateKey",
                InputType::String,
                "Key to the string value for the `/attack` command ('on' or 'off').",
            )
            .with_display("Desired State Key"),
            InputDecl::new(
                "attackTypeKey",
                InputType::String,
                "Key to the string value to determine if the command should be `attack` or \
                 `autofire`.",
            )
            .with_display("Attack Type Key"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::MemorizeSpell,
        category: NodeCategory::Action,
        description: "The MemorizeSpellNode is a type of Node designed to handle the \
                      memorization of spells into a character's spell gem slots in a \
                      behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the MemorizeSpell node."),
            InputDecl::new(
                "spellGemKey",
                InputType::String,
                "Key to extract the gem slot number (integer) for the spell memorization \
                 from the blackboard.",
            )
            .with_display("Spell Gem Key"),
            InputDecl::new(
                "spellIdKey",
                InputType::String,
                "Key to extract the spell ID (integer) to be memorized from the blackboard.",
            )
            .with_display("Spell ID Key"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::MoveTo,
        category: NodeCategory::Action,
        description: "The MoveToNode is a type of Node responsible for moving a character to \
                      a specified location or target in a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the MoveTo node."),
            InputDecl::new(
                "spawnIdKey",
                InputType::String,
                "Key to extract the spawn ID (number) from the blackboard, if moving towards \
                 a specific target.",
            )
            .with_display("Spawn ID Key"),
            InputDecl::new(
                "coordinatesKey",
                InputType::String,
                "Key to extract the target coordinates (object with X, Y, Z values) from the \
                 blackboard, if moving towards a specific location.",
            )
            .with_display("Coordinates Key"),
            InputDecl::new(
                "positionKey",
                InputType::String,
                "Key to extract the position range (object with Min and Max values) from the \
                 blackboard, defining the arc range for positioning relative to the target.",
            )
            .with_display("Position Key"),
            InputDecl::new(
                "distanceKey",
                InputType::String,
                "Key to extract the distance range (object with Min and Max values) from the \
                 blackboard, defining how close the character needs to be to the target \
                 location.",
            )
            .with_display("Distance Key"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Sit,
        category: NodeCategory::Action,
        description: "The SitNode is a type of Node designed to manage the character's \
                      sitting state in a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the Sit node."),
            InputDecl::new(
                "maxSitAttempts",
                InputType::Number,
                "The maximum number of attempts the node should make to sit before returning \
                 failure.",
            )
            .with_display("Max Sit Attempts"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Target,
        category: NodeCategory::Action,
        description: "The TargetNode is a type of Node used to target specific entities \
                      within a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the Target node."),
            InputDecl::new(
                "targetIdKey",
                InputType::String,
                "Key to extract the spawn search (number or string) from the blackboard.",
            )
            .with_display("Target ID Key"),
            InputDecl::new(
                "targetTypeKey",
                InputType::String,
                "Key to extract the target type (e.g., \"NPC\", \"PC\") from the blackboard.",
            )
            .with_display("Target Type Key")
            .optional(),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Face,
        category: NodeCategory::Action,
        description: "The FaceNode is a type of Node used to face a specified ID or loc."
            .to_string(),
        inputs: vec![
            name_input("Name of the Face node."),
            InputDecl::new(
                "faceIdKey",
                InputType::String,
                "Key to extract the id from the blackboard.",
            )
            .with_display("Spawn ID Key")
            .optional(),
            InputDecl::new(
                "locationKey",
                InputType::String,
                "Key to extract the location from the blackboard.",
            )
            .with_display("Location Key")
            .optional(),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Wait,
        category: NodeCategory::Action,
        description: "The WaitNode is a type of Node that pauses execution for a specified \
                      duration. This node is commonly used to introduce delays or timed \
                      waits within a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("The name of the WaitNode, used for identification and debugging."),
            InputDecl::new(
                "time",
                InputType::Number,
                "The duration to wait in seconds.",
            )
            .with_display("Time (Seconds)"),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    // Others
    registry.register(NodeSchema {
        node_type: NodeType::Condition,
        category: NodeCategory::Other,
        description: "The ConditionNode is a type of Node used to evaluate conditions within \
                      a behavior tree."
            .to_string(),
        inputs: vec![
            name_input("Name of the Condition node."),
            InputDecl::new(
                "conditionKey",
                InputType::Condition,
                "Key referencing the specific condition function to evaluate.",
            )
            .with_display("Condition Key"),
            InputDecl::new(
                "paramKeys",
                InputType::StringList,
                "Optional array of keys to extract parameters from the blackboard for use \
                 with the condition function. Defaults to an empty array.",
            )
            .with_display("Parameter Keys")
            .optional(),
        ],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Failer,
        category: NodeCategory::Other,
        description: "The FailerNode is a specialized Node that always returns a Failure \
                      state when executed. It's used within a behavior tree to represent an \
                      action or condition that always fails, typically to deliberately \
                      trigger the failure of a particular branch."
            .to_string(),
        inputs: vec![name_input("The name of the Failer node.")],
        can_have_children: false,
        is_decorator: false,
    });

    registry.register(NodeSchema {
        node_type: NodeType::Succeeder,
        category: NodeCategory::Other,
        description: "The SucceederNode is a type of Node that always returns Success, \
                      regardless of its child node's result. It's typically used to ensure \
                      that a branch of the behavior tree continues executing even if a \
                      non-critical action fails."
            .to_string(),
        inputs: vec![name_input(
            "The name of the SucceederNode, used for identification and debugging.",
        )],
        can_have_children: false,
        is_decorator: false,
    });

    registry
}

/// Condition function keys known to the runtime's conditions table
pub const CONDITION_KEYS: &[&str] = &[
    "AlwaysFalse",
    "standing",
    "isValidTarget",
    "haveCorrectTarget",
    "spellMemorized",
    "spellMemorizing",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_membership() {
        let registry = create_builtin_registry();
        let composite = [
            NodeType::Sequence,
            NodeType::Select,
            NodeType::Parallel,
            NodeType::RandomSelector,
        ];
        for node_type in composite {
            assert_eq!(
                registry.get(node_type).map(|s| s.category),
                Some(NodeCategory::Composite)
            );
        }
        let decorators = [
            NodeType::Invert,
            NodeType::Loop,
            NodeType::Repeat,
            NodeType::Retry,
        ];
        for node_type in decorators {
            assert_eq!(
                registry.get(node_type).map(|s| s.category),
                Some(NodeCategory::Decorator)
            );
        }
    }

    #[test]
    fn test_condition_node_param_keys_are_a_list() {
        let registry = create_builtin_registry();
        let condition = registry.get(NodeType::Condition).unwrap();
        let param_keys = condition.input("paramKeys").unwrap();
        assert_eq!(param_keys.input_type, InputType::StringList);
        assert!(param_keys.optional);
    }

    #[test]
    fn test_cast_spell_inputs_are_ordered() {
        let registry = create_builtin_registry();
        let cast = registry.get(NodeType::CastSpell).unwrap();
        let names: Vec<&str> = cast.inputs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "name",
                "targetIdKey",
                "targetTypeKey",
                "spellIdKey",
                "spellKey",
                "spellTypeKey",
                "spellType",
                "spellResultKey",
            ]
        );
    }
}
