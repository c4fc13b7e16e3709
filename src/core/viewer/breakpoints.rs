//! 视口断点与窗口尺寸防抖

use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::core::pagination::NavigationConfig;

/// 单个断点：视口宽度不超过 `max_width` 时使用 `nav`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Breakpoint {
    #[serde(default)]
    pub max_width: Option<u16>,
    #[serde(flatten)]
    pub nav: NavigationConfig,
}

/// 默认断点：窄屏减少附近页码并降低中点阈值
pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint {
            max_width: Some(60),
            nav: NavigationConfig {
                nearby_pages: 0,
                mid_point_threshold: 3,
                always_show_first_last: true,
            },
        },
        Breakpoint {
            max_width: Some(100),
            nav: NavigationConfig {
                nearby_pages: 1,
                mid_point_threshold: 5,
                always_show_first_last: true,
            },
        },
        Breakpoint {
            max_width: None,
            nav: NavigationConfig::default(),
        },
    ]
}

/// 选出与视口宽度匹配的导航配置，按顺序取第一个命中的断点
pub fn select_config(
    breakpoints: &[Breakpoint],
    width: u16,
) -> NavigationConfig {
    breakpoints
        .iter()
        .find(|bp| bp.max_width.map_or(true, |max| width <= max))
        .map(|bp| bp.nav)
        .unwrap_or_default()
}

/// 窗口尺寸变化防抖
///
/// 连续的尺寸事件只在静默 `quiet_period` 之后触发一次，取最后一次的尺寸。
pub struct ResizeDebouncer {
    quiet_period: Duration,
    pending: Option<((u16, u16), Instant)>,
}

impl ResizeDebouncer {
    /// 创建新的防抖器
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// 记录一次尺寸事件
    pub fn record(&mut self, size: (u16, u16), now: Instant) {
        self.pending = Some((size, now));
    }

    /// 静默期结束时返回最终尺寸（列, 行）
    pub fn poll(&mut self, now: Instant) -> Option<(u16, u16)> {
        match self.pending {
            Some((size, at))
                if now.duration_since(at) >= self.quiet_period =>
            {
                self.pending = None;
                Some(size)
            }
            _ => None,
        }
    }

    /// 距离下次可能触发还需等待的时间
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|(_, at)| {
            self.quiet_period
                .saturating_sub(now.duration_since(at))
        })
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_uses_first_breakpoint() {
        let bps = default_breakpoints();
        assert_eq!(0, select_config(&bps, 40).nearby_pages);
        assert_eq!(0, select_config(&bps, 60).nearby_pages);
        assert_eq!(1, select_config(&bps, 61).nearby_pages);
        assert_eq!(2, select_config(&bps, 200).nearby_pages);
    }

    #[test]
    fn no_match_falls_back_to_default() {
        let bps = vec![Breakpoint {
            max_width: Some(10),
            nav: NavigationConfig {
                nearby_pages: 0,
                mid_point_threshold: 1,
                always_show_first_last: false,
            },
        }];
        assert_eq!(NavigationConfig::default(), select_config(&bps, 80));
        assert_eq!(NavigationConfig::default(), select_config(&[], 80));
    }

    #[test]
    fn debouncer_emits_last_size_once() {
        let start = Instant::now();
        let mut debouncer = ResizeDebouncer::new(Duration::from_millis(100));

        debouncer.record((80, 24), start);
        debouncer.record((90, 30), start + Duration::from_millis(50));
        assert_eq!(None, debouncer.poll(start + Duration::from_millis(120)));
        assert_eq!(
            Some(Duration::from_millis(30)),
            debouncer.time_until_due(start + Duration::from_millis(120))
        );

        assert_eq!(Some((90, 30)), debouncer.poll(start + Duration::from_millis(150)));
        assert_eq!(None, debouncer.poll(start + Duration::from_millis(400)));
        assert_eq!(None, debouncer.time_until_due(start));
    }
}
