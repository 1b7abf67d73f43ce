/// Position and transport flags of the verse slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub(in crate::app) current: usize,
    pub(in crate::app) playing: bool,
    pub(in crate::app) muted: bool,
}

impl PlaybackState {
    pub(in crate::app) fn new(current: usize) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    pub(in crate::app) fn next_index(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        (self.current + 1) % count
    }

    pub(in crate::app) fn previous_index(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        (self.current + count - 1) % count
    }
}

/// Index for a jump request, or `None` when it falls outside `0..count`.
pub(in crate::app) fn checked_target(target: i64, count: usize) -> Option<usize> {
    usize::try_from(target).ok().filter(|idx| *idx < count)
}
