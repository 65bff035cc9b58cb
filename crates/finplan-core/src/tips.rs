//! General financial-education tips appended to every plan

use crate::models::Tip;
use crate::money::format_currency;

/// Build the tips block.
///
/// The budgeting, saving and investing tips are always present. A debt tip is
/// added when `debt > 0`, and a goal-tracking tip carrying the monthly target
/// when `monthly_required > 0` (every path except "goal already reached").
pub fn general_tips(monthly_required: f64, debt: f64) -> Vec<Tip> {
    let mut tips = vec![
        Tip::new(
            "Budgeting",
            "Track your spending with a simple app or spreadsheet to identify savings opportunities.",
        ),
        Tip::new(
            "Saving",
            "Set up automatic transfers to a savings account each payday to build discipline.",
        ),
        Tip::new(
            "Investing",
            "Start small with low-risk options like index funds. Avoid get-rich-quick schemes.",
        ),
    ];

    if debt > 0.0 {
        tips.push(Tip::new(
            "Debt",
            "Pay more than the minimum on debts to reduce interest costs over time.",
        ));
    }

    if monthly_required > 0.0 {
        tips.push(Tip::new(
            "Goal Tracking",
            format!(
                "Check your progress monthly to stay motivated toward your {}/month savings target.",
                format_currency(monthly_required)
            ),
        ));
    }

    tips
}
