//! Two-step confirmation for destructive actions

/// An action that waits for an explicit yes before it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    DeleteProduct(u32),
    DeleteAdmin(u32),
    RestoreDatabase,
}

impl Pending {
    pub fn prompt(self) -> &'static str {
        match self {
            Pending::DeleteProduct(_) => "Apakah Anda yakin ingin menghapus produk ini?",
            Pending::DeleteAdmin(_) => "Apakah Anda yakin ingin menghapus admin ini?",
            Pending::RestoreDatabase => {
                "Apakah Anda yakin ingin mengembalikan database? Semua data saat ini akan diganti."
            }
        }
    }
}

/// Holds at most one pending action. A new request replaces the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confirmation {
    pending: Option<Pending>,
}

impl Confirmation {
    pub fn request(&mut self, action: Pending) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Hand over the pending action for execution.
    pub fn confirm(&mut self) -> Option<Pending> {
        self.pending.take()
    }

    /// Drop the pending action without running it.
    pub fn decline(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_hands_over_once() {
        let mut confirmation = Confirmation::default();
        confirmation.request(Pending::DeleteAdmin(3));

        assert_eq!(confirmation.confirm(), Some(Pending::DeleteAdmin(3)));
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn decline_clears_without_action() {
        let mut confirmation = Confirmation::default();
        confirmation.request(Pending::RestoreDatabase);
        confirmation.decline();

        assert_eq!(confirmation.pending(), None);
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn later_request_replaces_earlier() {
        let mut confirmation = Confirmation::default();
        confirmation.request(Pending::DeleteProduct(1));
        confirmation.request(Pending::DeleteProduct(2));

        assert_eq!(confirmation.confirm(), Some(Pending::DeleteProduct(2)));
    }
}
