// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Built-in generic, object and batch actions.

use serde_json::json;

use super::{ActionContext, ActionRegistry};
use crate::descriptor::{ActionDescriptor, ActionScope};

pub(super) fn register(registry: &mut ActionRegistry) {
    registry.register(ActionScope::Generic, "new", generic_new);
    registry.register(ActionScope::Generic, "list", generic_list);
    registry.register(ActionScope::Generic, "excel", generic_excel);
    registry.register(ActionScope::Generic, "save", generic_save);
    registry.register(ActionScope::Generic, "save-and-list", generic_save_and_list);
    registry.register(ActionScope::Generic, "save-and-add", generic_save_and_add);

    registry.register(ActionScope::Object, "edit", object_edit);
    registry.register(ActionScope::Object, "show", object_show);
    registry.register(ActionScope::Object, "delete", object_delete);

    registry.register(ActionScope::Batch, "delete", batch_delete);
}

fn generic_new(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Generic)
        .with_label("action.generic.new")
        .with_icon("glyphicon-plus")
        .with_route(format!("{}_new", ctx.base_actions_route))
}

fn generic_list(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Generic)
        .with_label("action.generic.list")
        .with_icon("glyphicon-list")
        .with_route(format!("{}_list", ctx.base_actions_route))
}

fn generic_excel(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Generic)
        .with_label("action.generic.excel")
        .with_icon("glyphicon-export")
        .with_route(format!("{}_excel", ctx.base_actions_route))
}

fn submit(name: &str, label: &str) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Generic)
        .with_label(label)
        .with_icon("glyphicon-ok")
        .with_property("type", json!("submit"))
        .with_property("submit", json!(name))
}

fn generic_save(name: &str, _: &ActionContext) -> ActionDescriptor {
    submit(name, "action.generic.save")
}

fn generic_save_and_list(name: &str, _: &ActionContext) -> ActionDescriptor {
    submit(name, "action.generic.save-and-list")
}

fn generic_save_and_add(name: &str, _: &ActionContext) -> ActionDescriptor {
    submit(name, "action.generic.save-and-add")
}

fn object_edit(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Object)
        .with_label("action.object.edit")
        .with_icon("glyphicon-pencil")
        .with_route(format!("{}_edit", ctx.base_actions_route))
}

fn object_show(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Object)
        .with_label("action.object.show")
        .with_icon("glyphicon-eye-open")
        .with_route(format!("{}_show", ctx.base_actions_route))
}

fn object_delete(name: &str, ctx: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Object)
        .with_label("action.object.delete")
        .with_icon("glyphicon-remove")
        .with_route(ctx.object_actions_route.clone())
        .with_confirm("action.object.delete.confirm")
        .csrf_protected()
        .with_property("params", json!({ "action": name }))
}

fn batch_delete(name: &str, _: &ActionContext) -> ActionDescriptor {
    ActionDescriptor::new(name, ActionScope::Batch)
        .with_label("action.batch.delete")
        .with_confirm("action.batch.delete.confirm")
        .csrf_protected()
}
