//! Settings commands. Each one edits a fresh draft and commits it at once.

use postsmith_application::PostsmithSession;
use postsmith_core::settings::SettingsEdit;

use crate::ListAction;

pub fn show(session: &PostsmithSession) {
    let settings = session.draft().committed();

    println!("Persona:");
    println!("  {}", settings.persona);
    println!("Sources:");
    if settings.sources.is_empty() {
        println!("  (none)");
    }
    for (i, source) in settings.sources.iter().enumerate() {
        println!("  {}. {}", i + 1, source);
    }
    println!("Schedule times:");
    for (i, time) in settings.schedule_times.iter().enumerate() {
        println!("  {}. {}", i + 1, time);
    }
    println!("Posts per day: {}", settings.posts_per_day);
}

pub fn set_persona(session: &mut PostsmithSession, text: String) {
    session.draft_mut().edit(SettingsEdit::Persona(text));
    save(session);
}

pub fn sources(session: &mut PostsmithSession, action: ListAction) {
    let draft = session.draft_mut();
    let changed = match action {
        ListAction::Add { value } => draft.add_source(&value),
        ListAction::Remove { position } => {
            position.checked_sub(1).is_some_and(|i| draft.remove_source(i))
        }
    };
    finish(session, changed);
}

pub fn schedule(session: &mut PostsmithSession, action: ListAction) {
    let draft = session.draft_mut();
    let changed = match action {
        ListAction::Add { value } => draft.add_schedule_time(&value),
        ListAction::Remove { position } => position
            .checked_sub(1)
            .is_some_and(|i| draft.remove_schedule_time(i)),
    };
    finish(session, changed);
}

pub fn quota(session: &mut PostsmithSession, value: u32) {
    session.draft_mut().edit(SettingsEdit::PostsPerDay(value));
    save(session);
}

fn finish(session: &mut PostsmithSession, changed: bool) {
    if changed {
        save(session);
    } else {
        println!("Unchanged (empty, duplicate, malformed or out of range).");
    }
}

fn save(session: &mut PostsmithSession) {
    if session.draft_mut().commit() {
        println!("Saved.");
    } else {
        println!("Unchanged.");
    }
}
