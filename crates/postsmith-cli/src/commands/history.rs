use postsmith_application::PostsmithSession;

pub fn list(session: &PostsmithSession, limit: Option<usize>) {
    let history = session.history();
    if history.is_empty() {
        println!("No posts yet.");
        return;
    }

    for entry in history.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("[{}] {}", entry.timestamp, entry.source_url);
        for line in entry.text.lines() {
            println!("  {}", line);
        }
    }
}

pub fn clear(session: &mut PostsmithSession) {
    let count = session.history().len();
    session.clear_history();
    println!("Cleared {} post(s).", count);
}
