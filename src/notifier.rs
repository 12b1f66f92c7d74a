//! Line-clear messages: a fixed list shown in turn, one per clearing sweep.

pub const MESSAGES: [&str; 7] = [
    "경증 환자, LA GRADE A-B, 라비에트 10MG BID",
    "중증 환자, LA GRADE C-D, 라비에트 20MG BID",
    "가슴 통증, 만성 기침, 후두 이물감 있는 환자, 라비에트 20MG BID",
    "라비에트는 FULL DOSE BID 처방(20MG BID)되는 유일한 PPI(K21.0)",
    "라비에트는 재활용 포장 사용 친환경 제품입니다.",
    "라비에트는 국내 라베프라졸 NO.1 제품",
    "클래리스로마이신과의 약물 상호 작용이 적어 제균에 효과적",
];

/// Cursor into [`MESSAGES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    cursor: usize,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the message the next call to [`Notifier::next`] returns.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Message at the cursor; the cursor then moves on, wrapping after the last one.
    pub fn next(&mut self) -> &'static str {
        let message = MESSAGES[self.cursor];
        self.cursor = (self.cursor + 1) % MESSAGES.len();
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_message() {
        let mut n = Notifier::new();
        assert_eq!(n.cursor(), 0);
        assert_eq!(n.next(), MESSAGES[0]);
        assert_eq!(n.next(), MESSAGES[1]);
        assert_eq!(n.cursor(), 2);
    }

    #[test]
    fn wraps_after_seven() {
        let mut n = Notifier::new();
        for expected in MESSAGES {
            assert_eq!(n.next(), expected);
        }
        assert_eq!(n.cursor(), 0);
        assert_eq!(n.next(), MESSAGES[0]);
    }
}
