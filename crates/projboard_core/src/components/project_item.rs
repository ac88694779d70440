//! Project card component and drag source.

use crate::components::ItemView;
use crate::drag::{DragEvent, Draggable, EffectAllowed, TEXT_PLAIN};
use crate::model::project::Project;
use log::debug;

/// One rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// `"1 Participant"`, `"3 Participants"`.
    pub fn participants_text(&self) -> String {
        let suffix = if self.project.people > 1 { "s" } else { "" };
        format!("{} Participant{suffix}", self.project.people)
    }

    pub fn view(&self) -> ItemView {
        ItemView {
            element_id: self.project.id.to_string(),
            project_id: self.project.id,
            title: self.project.title.clone(),
            participants: self.participants_text(),
            description: self.project.description.clone(),
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, event: &mut DragEvent) {
        let transfer = event.data_transfer.get_or_insert_with(Default::default);
        transfer.set_data(TEXT_PLAIN, self.project.id.to_string());
        transfer.effect_allowed = EffectAllowed::Move;
        debug!(
            "event=drag_start module=components status=ok id={}",
            self.project.id
        );
    }

    fn drag_end_handler(&self, event: &DragEvent) {
        debug!(
            "event=drag_end module=components status=ok id={} accepted={}",
            self.project.id,
            event.default_prevented()
        );
    }
}
