use crate::duration::format_secs;

pub trait PrettyDuration {
    fn pretty(&self) -> String;
}

/// Formats Duration for human consumption, "m:ss" or "h:mm:ss".
impl PrettyDuration for std::time::Duration {
    fn pretty(&self) -> String {
        format_secs(self.as_secs())
    }
}
