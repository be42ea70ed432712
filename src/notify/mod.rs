//! Outbound notification: who learns about the new active page

/// Receives the active page after every successful transition.
///
/// Called synchronously, once per transition, after the page sequence has
/// been recomputed.
pub trait ActivePageObserver {
    fn on_active_page_changed(&mut self, page: usize);
}

impl<F> ActivePageObserver for F
where
    F: FnMut(usize),
{
    fn on_active_page_changed(&mut self, page: usize) {
        self(page)
    }
}

/// Observer that drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ActivePageObserver for NoopObserver {
    fn on_active_page_changed(&mut self, _page: usize) {}
}

/// Observer that keeps every notified page, in order
#[derive(Debug, Clone, Default)]
pub struct PageLog {
    pages: Vec<usize>,
}

impl PageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    pub fn last(&self) -> Option<usize> {
        self.pages.last().copied()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl ActivePageObserver for PageLog {
    fn on_active_page_changed(&mut self, page: usize) {
        self.pages.push(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |page: usize| seen.push(page);
            observer.on_active_page_changed(3);
            observer.on_active_page_changed(4);
        }
        assert_eq!(seen, vec![3, 4]);
    }

    #[test]
    fn test_page_log() {
        let mut log = PageLog::new();
        assert!(log.is_empty());
        log.on_active_page_changed(1);
        log.on_active_page_changed(7);
        assert_eq!(log.pages(), &[1, 7]);
        assert_eq!(log.last(), Some(7));
        assert_eq!(log.len(), 2);
    }
}
