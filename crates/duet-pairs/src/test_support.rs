//! Hand-rolled fakes shared by the crate's test modules.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use duet_common::types::{
    Configuration, ContainerToken, Point, Rect, SurfaceHandle, TaskId, TaskSnapshot,
};

use crate::controller::PairController;
use crate::ports::{HierarchySink, LayoutFactory, PairDeps, PairLayout, SurfaceSink, TaskRegistry};
use crate::transactions::{HierarchyTransaction, SurfaceTransaction};

pub fn task(id: u32) -> TaskSnapshot {
    TaskSnapshot {
        id: TaskId(id),
        token: ContainerToken(u64::from(id) * 10),
        resizable: true,
        display_id: 0,
        configuration: Configuration::default(),
        position_in_parent: Point {
            x: f64::from(id),
            y: 0.0,
        },
    }
}

pub fn unresizable(id: u32) -> TaskSnapshot {
    TaskSnapshot {
        resizable: false,
        ..task(id)
    }
}

pub struct FakeRegistry {
    tasks: HashMap<TaskId, TaskSnapshot>,
}

impl FakeRegistry {
    pub fn new(tasks: &[TaskSnapshot]) -> Self {
        Self {
            tasks: tasks.iter().map(|t| (t.id, *t)).collect(),
        }
    }
}

impl TaskRegistry for FakeRegistry {
    fn lookup(&self, task: TaskId) -> Option<TaskSnapshot> {
        self.tasks.get(&task).copied()
    }
}

pub struct RecordingHierarchySink {
    applied: Rc<RefCell<Vec<HierarchyTransaction>>>,
}

impl HierarchySink for RecordingHierarchySink {
    fn apply(&self, txn: HierarchyTransaction) {
        self.applied.borrow_mut().push(txn);
    }
}

pub struct RecordingSurfaceSink {
    queued: Rc<RefCell<Vec<SurfaceTransaction>>>,
}

impl SurfaceSink for RecordingSurfaceSink {
    fn run_in_sync(&self, txn: SurfaceTransaction) {
        self.queued.borrow_mut().push(txn);
    }
}

/// Observable state of one fake layout, shared with the test through `Rc`.
#[derive(Default)]
pub struct LayoutProbe {
    pub released: usize,
    pub divider_visible: Option<bool>,
    /// What the next `update_configuration` call reports.
    pub update_changes: bool,
}

pub struct FakeLayout {
    probe: Rc<RefCell<LayoutProbe>>,
    divider: SurfaceHandle,
}

impl PairLayout for FakeLayout {
    fn bounds_a(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 720.0,
        }
    }

    fn bounds_b(&self) -> Rect {
        Rect {
            x: 656.0,
            y: 0.0,
            width: 640.0,
            height: 720.0,
        }
    }

    fn divider_surface(&self) -> SurfaceHandle {
        self.divider
    }

    fn divider_bounds(&self) -> Rect {
        Rect {
            x: 640.0,
            y: 0.0,
            width: 16.0,
            height: 720.0,
        }
    }

    fn set_divider_visible(&mut self, visible: bool) {
        self.probe.borrow_mut().divider_visible = Some(visible);
    }

    fn update_configuration(&mut self, _config: &Configuration) -> bool {
        self.probe.borrow().update_changes
    }

    fn release(&mut self) {
        self.probe.borrow_mut().released += 1;
    }
}

pub struct FakeLayoutFactory {
    probes: Rc<RefCell<Vec<Rc<RefCell<LayoutProbe>>>>>,
}

impl LayoutFactory for FakeLayoutFactory {
    fn create(
        &self,
        _display_id: u32,
        _config: &Configuration,
        _root_surface: SurfaceHandle,
    ) -> Box<dyn PairLayout> {
        let probe = Rc::new(RefCell::new(LayoutProbe::default()));
        let mut probes = self.probes.borrow_mut();
        probes.push(Rc::clone(&probe));
        Box::new(FakeLayout {
            probe,
            divider: SurfaceHandle(9000 + probes.len() as u64),
        })
    }
}

/// Handles onto everything the fakes record.
pub struct Harness {
    pub hierarchy: Rc<RefCell<Vec<HierarchyTransaction>>>,
    pub surfaces: Rc<RefCell<Vec<SurfaceTransaction>>>,
    pub probes: Rc<RefCell<Vec<Rc<RefCell<LayoutProbe>>>>>,
}

impl Harness {
    pub fn hierarchy_count(&self) -> usize {
        self.hierarchy.borrow().len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.borrow().len()
    }

    pub fn probe(&self, index: usize) -> Rc<RefCell<LayoutProbe>> {
        Rc::clone(&self.probes.borrow()[index])
    }
}

pub fn deps() -> (PairDeps, Harness) {
    let hierarchy = Rc::new(RefCell::new(Vec::new()));
    let surfaces = Rc::new(RefCell::new(Vec::new()));
    let probes = Rc::new(RefCell::new(Vec::new()));
    let deps = PairDeps {
        hierarchy: Box::new(RecordingHierarchySink {
            applied: Rc::clone(&hierarchy),
        }),
        surfaces: Box::new(RecordingSurfaceSink {
            queued: Rc::clone(&surfaces),
        }),
        layouts: Box::new(FakeLayoutFactory {
            probes: Rc::clone(&probes),
        }),
    };
    (
        deps,
        Harness {
            hierarchy,
            surfaces,
            probes,
        },
    )
}

pub fn controller(tasks: &[TaskSnapshot]) -> (PairController, Harness) {
    let (deps, harness) = deps();
    let controller = PairController::with_deps(Box::new(FakeRegistry::new(tasks)), deps);
    (controller, harness)
}
