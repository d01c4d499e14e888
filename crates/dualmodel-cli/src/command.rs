use crate::{ConvertArgs, Direction, json};
use anyhow::{Context, Result, bail};
use dualmodel::{
    convert,
    core::{DumpOptions, PersistenceInstance, ValidationInstance, ValidationPatch},
    primitives::Value,
    schema::{registry::Registry, types::Cardinality},
};
use serde_json::Value as Json;
use std::{fs, io, path::Path};

pub fn registry(registry: &Registry, as_json: bool) -> Result<()> {
    if as_json {
        let snapshot = registry.list_registered();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);

        return Ok(());
    }

    println!("{:>4}  {:<20} {:>4}", "ord", "type", "val");
    for schema in registry.persistence_schemas() {
        let validation = registry
            .lookup_validation(schema.name())
            .ok()
            .and_then(|v| v.ordinal())
            .map_or_else(|| "-".to_string(), |ordinal| ordinal.to_string());
        let ordinal = schema.ordinal().unwrap_or_default();

        println!("{ordinal:>4}  {:<20} {validation:>4}", schema.name());
    }

    Ok(())
}

pub fn check(registry: &Registry) -> Result<()> {
    registry.check_parity().context("parity check failed")?;

    let snapshot = registry.list_registered();
    for name in snapshot.unpaired() {
        log::warn!("persistence type '{name}' has no validation counterpart");
    }
    println!(
        "ok: {} validation types, each with an earlier persistence type",
        snapshot.validation.len()
    );

    Ok(())
}

pub fn convert(args: &ConvertArgs) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let doc: Json = serde_json::from_str(&input).context("input is not valid JSON")?;
    log::debug!("converting {} ({:?})", args.type_name, args.direction);

    let out = match args.direction {
        Direction::ToValidation => {
            let row = read_row(&args.type_name, &doc)?;
            let record = match &args.projection {
                Some(projection) => convert::to_projection(&row, projection)?,
                None => convert::to_validation(&row)?,
            };
            render_record(&record)
        }
        Direction::ToPersistence => {
            let record = read_record(&args.type_name, &doc)?;
            let options = DumpOptions {
                exclude_unset: args.exclude_unset,
                exclude_none: args.exclude_none,
            };
            render_row(&convert::to_persistence_with(&record, options)?)
        }
        Direction::Patch => {
            let members = json::members(&doc)?;
            let (Some(row), Some(patch)) = (members.get("row"), members.get("patch")) else {
                bail!("patch input needs both \"row\" and \"patch\" objects");
            };

            let mut row = read_row(&args.type_name, row)?;
            convert::apply_update(&mut row, &read_patch(&args.type_name, patch)?)?;
            render_row(&row)
        }
    };

    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => io::read_to_string(io::stdin()).context("cannot read stdin"),
    }
}

fn read_row(type_name: &str, doc: &Json) -> Result<PersistenceInstance> {
    let mut row = convert::new_persistence(type_name)?;
    for (name, value) in json::members(doc)? {
        let hint = row.schema().field(name).map(|f| f.storage);
        row.set(name, json::to_value(name, value, hint, false)?)?;
    }

    Ok(row)
}

fn read_record(type_name: &str, doc: &Json) -> Result<ValidationInstance> {
    let schema = dualmodel::registry()?.lookup_validation(type_name)?;
    let fields = json::members(doc)?
        .iter()
        .map(|(name, value)| {
            let field = schema.field(name);
            let hint = field.map(|f| f.ty);
            let many = field.is_some_and(|f| f.cardinality == Cardinality::Many);
            Ok((name.as_str(), json::to_value(name, value, hint, many)?))
        })
        .collect::<Result<Vec<(&str, Value)>>>()?;

    Ok(convert::validate(type_name, fields)?)
}

fn read_patch(type_name: &str, doc: &Json) -> Result<ValidationPatch> {
    let mut patch = convert::new_patch(type_name)?;
    for (name, value) in json::members(doc)? {
        let field = patch.schema().field(name);
        let hint = field.map(|f| f.ty);
        let many = field.is_some_and(|f| f.cardinality == Cardinality::Many);
        let value = json::to_value(name, value, hint, many)?;
        patch = patch.set(name, value)?;
    }

    Ok(patch)
}

fn render_row(row: &PersistenceInstance) -> Json {
    json::object(row.iter().map(|(field, value)| (field.name.as_str(), value)))
}

fn render_record(record: &ValidationInstance) -> Json {
    json::object(record.iter().map(|(field, value)| (field.name.as_str(), value)))
}
