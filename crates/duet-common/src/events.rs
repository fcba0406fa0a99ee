use serde::{Deserialize, Serialize};

use crate::types::{SurfaceHandle, TaskId, TaskSnapshot};

/// Lifecycle notifications a host delivers to the pair controller.
///
/// All variants are expected on one serialized execution context; the
/// controller performs no internal locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PairEvent {
    TaskAppeared {
        task: TaskSnapshot,
        surface: SurfaceHandle,
    },
    TaskInfoChanged {
        task: TaskSnapshot,
    },
    TaskVanished {
        task: TaskSnapshot,
    },
    TaskMovedToFront {
        task: TaskId,
    },
    KeyguardVisibilityChanged {
        showing: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Configuration, ContainerToken, Point};

    fn snapshot(id: u32) -> TaskSnapshot {
        TaskSnapshot {
            id: TaskId(id),
            token: ContainerToken(u64::from(id)),
            resizable: true,
            display_id: 0,
            configuration: Configuration::default(),
            position_in_parent: Point::default(),
        }
    }

    #[test]
    fn event_round_trip() {
        let event = PairEvent::TaskAppeared {
            task: snapshot(4),
            surface: SurfaceHandle(400),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PairEvent = serde_json::from_str(&json).unwrap();
        assert!(
            matches!(back, PairEvent::TaskAppeared { task, surface }
                if task.id == TaskId(4) && surface == SurfaceHandle(400))
        );
    }

    #[test]
    fn event_tagged_representation() {
        let event = PairEvent::KeyguardVisibilityChanged { showing: true };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"KeyguardVisibilityChanged","data":{"showing":true}}"#
        );
    }

    #[test]
    fn moved_to_front_round_trip() {
        let event = PairEvent::TaskMovedToFront { task: TaskId(12) };
        let json = serde_json::to_string(&event).unwrap();
        let back: PairEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PairEvent::TaskMovedToFront { task } if task == TaskId(12)));
    }
}
