//! 非交互子命令：每次调用初始化一次 store，执行一个操作

use std::io::Write;
use std::path::Path;

use super::ThemeArg;
use crate::clock::Clock;
use crate::error::Result;
use crate::model::{TaskFilter, TaskId};
use crate::storage::{config, KeyValueStore, Paths};
use crate::store::TaskStore;

/// 添加任务，成功时输出新 ID
pub fn add<S: KeyValueStore, C: Clock>(
    store: &mut TaskStore<S, C>,
    words: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let text = words.join(" ");
    match store.add_task(&text)? {
        Some(id) => writeln!(out, "Added task {}", id)?,
        None => writeln!(out, "Nothing to add: task text is empty")?,
    }
    Ok(())
}

pub fn toggle<S: KeyValueStore, C: Clock>(
    store: &mut TaskStore<S, C>,
    id: TaskId,
    out: &mut impl Write,
) -> Result<()> {
    if store.toggle_completion(id)? {
        let state = match store.get(id) {
            Some(task) if task.completed => "completed",
            _ => "pending",
        };
        writeln!(out, "Task {} is now {}", id, state)?;
    } else {
        writeln!(out, "No task with id {}", id)?;
    }
    Ok(())
}

pub fn delete<S: KeyValueStore, C: Clock>(
    store: &mut TaskStore<S, C>,
    id: TaskId,
    out: &mut impl Write,
) -> Result<()> {
    if store.delete_task(id)? {
        writeln!(out, "Deleted task {}", id)?;
    } else {
        writeln!(out, "No task with id {}", id)?;
    }
    Ok(())
}

/// 列出任务
///
/// 文本格式：`[x] 1700000000000  buy milk`
pub fn list<S: KeyValueStore, C: Clock>(
    store: &TaskStore<S, C>,
    filter: TaskFilter,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let view = store.filtered_view(filter);

    if json {
        let tasks: Vec<_> = view.collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&tasks)?)?;
        return Ok(());
    }

    let mut shown = 0;
    for task in view {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        writeln!(out, "{} {}  {}", mark, task.id, task.text)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No {} tasks", filter.label().to_lowercase())?;
    }
    Ok(())
}

/// 显示或修改主题
pub fn theme<S: KeyValueStore, C: Clock>(
    store: &mut TaskStore<S, C>,
    value: Option<ThemeArg>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(arg) = value {
        let target = arg.resolve(store.theme());
        store.set_theme(target)?;
    }
    writeln!(out, "{}", store.theme())?;
    Ok(())
}

pub fn paths(paths: &Paths, out: &mut impl Write) -> Result<()> {
    writeln!(out, "base:    {}", paths.base.display())?;
    writeln!(out, "config:  {}", paths.config.display())?;
    writeln!(out, "storage: {}", paths.storage.display())?;
    writeln!(out, "log:     {}", paths.log.display())?;
    Ok(())
}

/// 写入默认配置（已存在则不覆盖）
pub fn init(base: &Path, paths: &Paths, out: &mut impl Write) -> Result<()> {
    if paths.config.exists() {
        writeln!(out, "Config already exists: {}", paths.config.display())?;
        return Ok(());
    }
    config::save_config(base, &config::Config::default())?;
    writeln!(out, "Wrote {}", paths.config.display())?;
    Ok(())
}
