//! Output formatting for ping command results.

use super::execute::PingResult;
use crate::output::Outputable;

impl Outputable for PingResult {
    fn to_table(&self) -> String {
        if self.success {
            self.message.clone()
        } else {
            format!("Connection failed: {}", self.message)
        }
    }
}
