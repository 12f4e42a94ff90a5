//! 时间来源（任务 ID 生成用）

use chrono::Utc;

pub trait Clock {
    /// 当前 Unix 毫秒时间戳
    fn now_millis(&self) -> i64;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_mock_clock() {
        let clock = mock::MockClock::at(1_000);
        let shared = clock.clone();
        shared.advance(5);
        assert_eq!(clock.now_millis(), 1_005);
        clock.set(10);
        assert_eq!(shared.now_millis(), 10);
    }
}
