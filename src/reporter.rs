use crate::models::SyncPlan;

/// Render the reconciliation summary as a tree on one string
///
/// `total` is the number of findings in code, which is not the same as the
/// number of created issues. Empty sections are omitted entirely; section
/// order is fixed: newly created, already existing, just closed.
pub fn render(plan: &SyncPlan, total: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Found <{total}> comments in code!\n"));

    let has_existing = !plan.still_open.is_empty();
    let has_closed = !plan.to_close.is_empty();

    if !plan.to_create.is_empty() {
        let more_sections = has_existing || has_closed;
        out.push_str(&format!("{} Newly created issues:\n", prefix(&[more_sections])));
        for (i, finding) in plan.to_create.iter().enumerate() {
            let more_items = i + 1 < plan.to_create.len();
            out.push_str(&format!("{} {}\n", prefix(&[more_sections, more_items]), finding.title));
        }
    }

    if has_existing {
        out.push_str(&format!("{} Already existing issues:\n", prefix(&[has_closed])));
        for (i, title) in plan.still_open.iter().enumerate() {
            let more_items = i + 1 < plan.still_open.len();
            out.push_str(&format!("{} {}\n", prefix(&[has_closed, more_items]), title));
        }
    }

    if has_closed {
        out.push_str(&format!("{} Just closed issues:\n", prefix(&[false])));
        for (i, issue) in plan.to_close.iter().enumerate() {
            let more_items = i + 1 < plan.to_close.len();
            out.push_str(&format!("{} {}\n", prefix(&[false, more_items]), issue.title));
        }
    }

    out
}

/// Box-drawing prefix for one tree row
///
/// Each level says whether more siblings follow at that depth. Intermediate
/// levels render as continuation bars, the last level as the branch connector.
fn prefix(levels: &[bool]) -> String {
    levels
        .iter()
        .enumerate()
        .map(|(i, &more)| {
            if i + 1 < levels.len() {
                if more { "│  " } else { "   " }
            } else if more {
                "├──"
            } else {
                "└──"
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
