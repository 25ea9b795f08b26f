//! 搜索 API 的数据模型
//!
//! 字段与 search.json 的返回结构一一对应。
//! 游标 (`min_id`/`max_id`) 是服务端分配的不透明字符串，
//! 客户端从不解析它的内容。

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

/// 一次搜索调用的参数
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// 按 system ID 过滤
    pub system_id: Option<String>,
    /// 按 group ID 过滤
    pub group_id: Option<String>,
    /// 查询字符串（多个关键词以空格连接）
    pub query: String,
    /// 游标：只返回此 ID 之后的事件
    ///
    /// 一旦设置，同一次运行内只会单调前移，始终取自上一次响应的 `max_id`。
    pub min_id: Option<String>,
    /// 只返回此时间之后的事件（启动时换算一次，仅作用于第一次查询）
    pub min_time: Option<DateTime<Utc>>,
    /// 每页最多返回的事件数
    pub limit: Option<u32>,
}

/// 一条日志事件
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// 服务端事件 ID
    #[serde(default)]
    pub id: String,
    /// 服务端接收时间
    pub received_at: DateTime<FixedOffset>,
    /// 服务端预格式化的接收时间
    #[serde(default)]
    pub display_received_at: String,
    /// 来源名称
    pub source_name: String,
    /// 发送方 hostname
    #[serde(default)]
    pub hostname: String,
    /// syslog facility
    pub facility: String,
    /// syslog severity
    #[serde(default)]
    pub severity: String,
    /// 产生日志的程序名（可能缺失）
    #[serde(default)]
    pub program: Option<String>,
    /// 日志内容
    pub message: String,
}

impl Event {
    /// 格式化为单行输出
    ///
    /// `<received_at> <source_name> <facility> <program>: <message>`，
    /// program 缺失时渲染为空字符串而不是占位符。
    pub fn format_line(&self) -> String {
        let program = self.program.as_deref().unwrap_or("");
        format!(
            "{} {} {} {}: {}",
            self.received_at, self.source_name, self.facility, program, self.message
        )
    }
}

/// 一次搜索调用的结果页
///
/// 每次调用新产生一页，poller 消费后即丢弃。
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// 本页事件，服务端顺序（旧到新）
    pub events: Vec<Event>,
    /// 本页最旧事件的游标
    #[serde(default)]
    pub min_id: String,
    /// 本页最新事件的游标，下一次查询的 `min_id`
    #[serde(default)]
    pub max_id: String,
    /// 是否已经到达日志最早处
    #[serde(default)]
    pub reached_beginning: bool,
    /// 是否因单页上限被截断
    #[serde(default)]
    pub reached_record_limit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(program: Option<&str>) -> Event {
        Event {
            id: "7711582041804800000".to_string(),
            received_at: DateTime::parse_from_rfc3339("2020-06-01T12:00:00+00:00").unwrap(),
            display_received_at: "Jun 01 12:00:00".to_string(),
            source_name: "web-1".to_string(),
            hostname: "web-1".to_string(),
            facility: "User".to_string(),
            severity: "Info".to_string(),
            program: program.map(|p| p.to_string()),
            message: "request completed".to_string(),
        }
    }

    #[test]
    fn test_format_line_with_program() {
        let event = sample_event(Some("nginx"));
        let line = event.format_line();
        assert_eq!(
            line,
            format!("{} web-1 User nginx: request completed", event.received_at)
        );
    }

    #[test]
    fn test_format_line_without_program_renders_empty_field() {
        let event = sample_event(None);
        let line = event.format_line();
        // program 字段为空字符串，不是 "nil"/"None" 之类的占位符
        assert_eq!(
            line,
            format!("{} web-1 User : request completed", event.received_at)
        );
        assert!(!line.contains("None"));
        assert!(!line.contains("nil"));
    }

    #[test]
    fn test_deserialize_search_result() {
        let body = r#"{
            "events": [
                {
                    "id": "7711582041804800000",
                    "received_at": "2020-06-01T12:00:00-07:00",
                    "display_received_at": "Jun 01 12:00:00",
                    "source_name": "web-1",
                    "hostname": "web-1",
                    "facility": "User",
                    "severity": "Info",
                    "program": "nginx",
                    "message": "request completed"
                },
                {
                    "received_at": "2020-06-01T12:00:01-07:00",
                    "source_name": "web-2",
                    "facility": "Local0",
                    "program": null,
                    "message": "boot"
                }
            ],
            "min_id": "7711582041804800000",
            "max_id": "7711582041804800001",
            "reached_beginning": false,
            "reached_record_limit": false
        }"#;

        let result: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.events.len(), 2);
        assert_eq!(result.max_id, "7711582041804800001");
        assert_eq!(result.events[0].program.as_deref(), Some("nginx"));
        assert_eq!(result.events[1].program, None);
        assert_eq!(result.events[1].severity, "");
        assert!(!result.reached_beginning);
    }

    #[test]
    fn test_default_options_have_no_cursor() {
        let options = SearchOptions::default();
        assert!(options.min_id.is_none());
        assert!(options.min_time.is_none());
        assert!(options.query.is_empty());
    }
}
