//! Sidebar quick stats. Sample figures only.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_kind: ChangeKind,
}

pub fn default_quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat {
            label: "Active Guests",
            value: "24",
            change: "+3",
            change_kind: ChangeKind::Positive,
        },
        QuickStat {
            label: "Rooms Occupied",
            value: "18",
            change: "+2",
            change_kind: ChangeKind::Positive,
        },
        QuickStat {
            label: "Pending Invoices",
            value: "7",
            change: "-2",
            change_kind: ChangeKind::Negative,
        },
        QuickStat {
            label: "Today's Revenue",
            value: "$3,240",
            change: "+12%",
            change_kind: ChangeKind::Positive,
        },
    ]
}
