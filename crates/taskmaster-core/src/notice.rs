#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  Success,
  Error
}

impl NoticeKind {
  pub fn css_class(self) -> &'static str {
    match self {
      | NoticeKind::Success => {
        "toast toast-success"
      }
      | NoticeKind::Error => {
        "toast toast-error"
      }
    }
  }
}

/// A transient toast. Ids are unique for the lifetime of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub id:      u64,
  pub kind:    NoticeKind,
  pub message: String
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct NoticeQueue {
  next_id: u64,
  items:   Vec<Notice>
}

impl NoticeQueue {
  pub fn push(
    &mut self,
    kind: NoticeKind,
    message: impl Into<String>
  ) -> u64 {
    self.next_id += 1;
    let id = self.next_id;
    self.items.push(Notice {
      id,
      kind,
      message: message.into()
    });
    id
  }

  pub fn dismiss(
    &mut self,
    id: u64
  ) -> bool {
    let before = self.items.len();
    self.items.retain(|notice| notice.id != id);
    self.items.len() != before
  }

  pub fn items(&self) -> &[Notice] {
    &self.items
  }
}

#[cfg(test)]
mod tests {
  use super::{
    NoticeKind,
    NoticeQueue
  };

  #[test]
  fn dismiss_removes_only_that_notice() {
    let mut queue = NoticeQueue::default();
    let first = queue
      .push(NoticeKind::Success, "Task created");
    let second = queue
      .push(NoticeKind::Error, "Could not load");
    assert_ne!(first, second);

    assert!(queue.dismiss(first));
    assert!(!queue.dismiss(first));
    assert_eq!(queue.items().len(), 1);
    assert_eq!(
      queue.items().last().map(|notice| notice.id),
      Some(second)
    );
  }
}
