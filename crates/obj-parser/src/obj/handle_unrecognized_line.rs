use tracing::{debug, trace};

pub fn handle_unrecognized_line(keyword: &str, line_number: usize) {
    if keyword.starts_with('#') {
        trace!(line = line_number, "comment");
        return;
    }
    debug!(line = line_number, keyword, "unsupported statement ignored");
}
