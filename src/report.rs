/*!
Error printer used as the return type of `main`.
*/

use std::{error::Error as StdError, fmt};

pub struct Report(Box<dyn StdError + 'static>);

impl Report {
    /// Iterates over the causes of the reported error, outermost first.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.0.source(), |&e| e.source())
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        let mut causes = self.causes().enumerate().peekable();
        if causes.peek().is_some() {
            write!(f, "\n\nCaused by:")?;
        }
        for (depth, cause) in causes {
            write!(f, "\n  {}: {}", depth, cause)?;
        }

        Ok(())
    }
}

impl<E: StdError + 'static> From<E> for Report {
    fn from(e: E) -> Self {
        Report(Box::new(e))
    }
}
