//! Plain-text narration of attack results.
use battler_core::{AttackOutcome, AttackResult, Combatant, Facing};

/// How a combatant is referred to mid-sentence ("the goblin", "Aria").
pub fn display_name<C: Combatant + ?Sized>(combatant: &C) -> String {
    if combatant.is_generic() {
        format!("the {}", combatant.name())
    } else {
        combatant.name().to_string()
    }
}

/// Same as [`display_name`], capitalized to open a sentence.
pub fn subject_name<C: Combatant + ?Sized>(combatant: &C) -> String {
    capitalize(&display_name(combatant))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn approach(facing: Option<Facing>) -> &'static str {
    match facing {
        Some(Facing::Rear) => " from behind",
        Some(Facing::Side) => " from the flank",
        Some(Facing::Front) | None => "",
    }
}

/// One line per swing, or a single line when the defender was out of reach.
pub fn narrate<A, D>(attacker: &A, defender: &D, result: &AttackResult) -> Vec<String>
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let subject = subject_name(attacker);
    let target = display_name(defender);

    if !result.in_range {
        return vec![format!("{subject} cannot reach {target}.")];
    }

    let from = approach(result.facing);
    result
        .details
        .iter()
        .map(|swing| match swing.outcome {
            AttackOutcome::Hit => {
                format!("{subject} hits {target}{from} for {} damage.", swing.damage)
            }
            AttackOutcome::Critical => format!(
                "{subject} lands a critical hit on {target}{from} for {} damage!",
                swing.damage
            ),
            AttackOutcome::Miss => format!("{subject} misses {target}."),
            AttackOutcome::Dodge => {
                format!("{} dodges {}'s attack.", subject_name(defender), display_name(attacker))
            }
        })
        .collect()
}
