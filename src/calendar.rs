//! Static spring planting calendar.
//!
//! A fixed schedule of early-season garden tasks. Dates are general
//! guidelines; callers should still check local conditions before planting.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Plant,
    Care,
    Harvest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One scheduled task on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlantingTask {
    pub month: &'static str,
    pub week: &'static str,
    pub task: &'static str,
    pub crops: &'static str,
    pub kind: TaskKind,
    pub priority: Priority,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

pub const SPRING_TASKS: &[PlantingTask] = &[
    PlantingTask {
        month: "March",
        week: "Week 1-2",
        task: "Start cool-season crops indoors",
        crops: "Lettuce, Spinach, Kale",
        kind: TaskKind::Plant,
        priority: Priority::High,
        description: "Begin seeds indoors for early spring transplanting",
        tips: &[
            "Use seed starting mix",
            "Keep soil moist but not waterlogged",
            "Provide 12-14 hours of light daily",
        ],
    },
    PlantingTask {
        month: "March",
        week: "Week 3-4",
        task: "Direct sow cold-hardy crops",
        crops: "Peas, Radishes, Carrots",
        kind: TaskKind::Plant,
        priority: Priority::High,
        description: "Plant directly in garden when soil can be worked",
        tips: &[
            "Wait until soil is no longer muddy",
            "Check soil temperature (45°F+)",
            "Plant in raised beds for better drainage",
        ],
    },
    PlantingTask {
        month: "April",
        week: "Week 1-2",
        task: "Transplant seedlings",
        crops: "Lettuce, Spinach, Kale",
        kind: TaskKind::Plant,
        priority: Priority::Medium,
        description: "Move indoor-started seedlings to garden",
        tips: &[
            "Harden off seedlings for 7-10 days",
            "Plant on cloudy day or in evening",
            "Use row covers if frost threatens",
        ],
    },
    PlantingTask {
        month: "April",
        week: "Week 3-4",
        task: "Start warm-season crops indoors",
        crops: "Tomatoes, Peppers, Herbs",
        kind: TaskKind::Plant,
        priority: Priority::Medium,
        description: "Begin warm-season seeds indoors for later transplanting",
        tips: &[
            "Use heat mats for better germination",
            "Maintain 70-75°F soil temperature",
            "Start 6-8 weeks before last frost",
        ],
    },
    PlantingTask {
        month: "May",
        week: "Week 1-2",
        task: "Succession plant lettuce",
        crops: "Lettuce, Arugula",
        kind: TaskKind::Plant,
        priority: Priority::Low,
        description: "Plant new lettuce every 2 weeks for continuous harvest",
        tips: &[
            "Choose heat-tolerant varieties",
            "Plant in partial shade",
            "Keep soil consistently moist",
        ],
    },
    PlantingTask {
        month: "May",
        week: "Week 3-4",
        task: "Begin harvesting",
        crops: "Radishes, Early Greens",
        kind: TaskKind::Harvest,
        priority: Priority::High,
        description: "Harvest first spring crops",
        tips: &[
            "Harvest radishes when 1 inch diameter",
            "Cut lettuce leaves from outside first",
            "Harvest in morning for best quality",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spring_schedule_covers_march_through_may() {
        assert_eq!(SPRING_TASKS.len(), 6);
        let months: Vec<&str> = SPRING_TASKS.iter().map(|t| t.month).collect();
        assert_eq!(months, ["March", "March", "April", "April", "May", "May"]);
    }

    #[test]
    fn every_task_has_tips() {
        for task in SPRING_TASKS {
            assert!(!task.tips.is_empty(), "{}", task.task);
        }
    }

    #[test]
    fn harvest_tasks_come_last() {
        assert_eq!(SPRING_TASKS[5].kind, TaskKind::Harvest);
        assert!(SPRING_TASKS[..5].iter().all(|t| t.kind == TaskKind::Plant));
    }
}
