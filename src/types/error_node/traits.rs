use super::ErrorNode;
use core::error::Error;
use core::fmt::Display;

impl Display for ErrorNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.render(), f);
        }
        Display::fmt(&self.render().cascaded(), f)
    }
}

impl Error for ErrorNode {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Some(cause) = self.cause() {
            return Some(cause as &(dyn Error + 'static));
        }
        self.source
            .as_deref()
            .map(|leaf| leaf as &(dyn Error + 'static))
    }
}
