use std::sync::Arc;

use serde_json::json;

use crate::ssh::{CommandOutput, Transport};
use crate::tests::support::{runtime, target, MockTransport};
use crate::tools::{GrepRemote, Tool};

fn grep_tool(mock: &Arc<MockTransport>) -> GrepRemote {
    GrepRemote::new(target(), Arc::clone(mock) as Arc<dyn Transport>)
}

#[test]
fn test_grep_tool_name() {
    let mock = Arc::new(MockTransport::new());
    assert_eq!(grep_tool(&mock).name(), "GrepRemote");
}

#[test]
fn test_default_mode_lists_files() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("src/main.rs\n");
        let tool = grep_tool(&mock);

        let result = tool.execute(json!({"pattern": "fn main"})).await.unwrap();

        assert_eq!(result, "src/main.rs\n");
        let (command, _) = mock.last_command();
        assert_eq!(command, "rg -l 'fn main' '/remote/project'");
    });
}

#[test]
fn test_content_mode_with_context_and_line_numbers() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("main.rs:1:fn main() {}\n");
        let tool = grep_tool(&mock);

        tool.execute(json!({
            "pattern": "fn main",
            "output_mode": "content",
            "-n": true,
            "-C": 2
        }))
        .await
        .unwrap();

        let (command, _) = mock.last_command();
        assert_eq!(command, "rg -n -C 2 'fn main' '/remote/project'");
    });
}

#[test]
fn test_before_and_after_context() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("x\n");
        let tool = grep_tool(&mock);

        tool.execute(json!({
            "pattern": "todo",
            "output_mode": "content",
            "-A": 3,
            "-B": 1
        }))
        .await
        .unwrap();

        let (command, _) = mock.last_command();
        assert_eq!(command, "rg -A 3 -B 1 'todo' '/remote/project'");
    });
}

#[test]
fn test_count_mode_with_filters_and_flags() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("src/main.rs:3\n");
        let tool = grep_tool(&mock);

        tool.execute(json!({
            "pattern": "error",
            "output_mode": "count",
            "-i": true,
            "type": "rust",
            "glob": "*.rs",
            "head_limit": 10
        }))
        .await
        .unwrap();

        let (command, _) = mock.last_command();
        assert_eq!(
            command,
            "rg -i -c --type 'rust' --glob '*.rs' 'error' '/remote/project' | head -n 10"
        );
    });
}

#[test]
fn test_multiline_flags() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("x\n");
        let tool = grep_tool(&mock);

        tool.execute(json!({"pattern": "struct \\{", "multiline": true}))
            .await
            .unwrap();

        let (command, _) = mock.last_command();
        assert!(command.starts_with("rg -U --multiline-dotall -l"));
    });
}

#[test]
fn test_no_matches_message() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_stdout("");
        let tool = grep_tool(&mock);

        let result = tool.execute(json!({"pattern": "absent"})).await.unwrap();
        assert_eq!(result, "No matches found for pattern: absent");
    });
}

#[test]
fn test_missing_search_path_reported() {
    let rt = runtime();
    rt.block_on(async {
        let mock = Arc::new(MockTransport::new());
        mock.push_output(CommandOutput {
            stdout: String::new(),
            stderr: "rg: /gone: No such file or directory".to_string(),
            exit_code: 2,
        });
        let tool = grep_tool(&mock);

        let err = tool
            .execute(json!({"pattern": "x", "path": "/gone"}))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Search path not found: /gone"));
    });
}
