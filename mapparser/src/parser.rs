use std::fs;
use std::path::Path;

use model::{HubName, NodeCategory, SimulationMap, SimulationMapBuilder, Zone};

use crate::error::ParseError;

/// Parses the §6 text map format into a validated [`SimulationMap`].
///
/// Mirrors the original per-record-kind processor structure as a `match`
/// over the lower-cased key rather than a class hierarchy: one small
/// function per record kind, a shared optional-block parser, and a
/// builder (`model::SimulationMapBuilder`) that accumulates state across
/// lines. Comment (`#`) and blank lines are skipped; every other line
/// must contain a `:` separator.
pub fn parse_map(path: &Path) -> Result<SimulationMap, ParseError> {
    let text = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_str(&text)
}

/// Same as [`parse_map`] but reads from an in-memory string; used by
/// tests and by [`parse_map`] itself.
pub fn parse_str(text: &str) -> Result<SimulationMap, ParseError> {
    let mut builder = SimulationMapBuilder::new();

    for (line_idx, raw_line) in text.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, content) = line
            .split_once(':')
            .ok_or(ParseError::MissingSeparator { line: line_num })?;
        let key = key.trim().to_lowercase();
        let content = content.trim().to_lowercase();

        match key.as_str() {
            "nb_drones" => process_nb_drones(&mut builder, content, line_num)?,
            "hub" => process_hub(&mut builder, &content, NodeCategory::Intermediate, line_num)?,
            "start_hub" => process_hub(&mut builder, &content, NodeCategory::Start, line_num)?,
            "end_hub" => process_hub(&mut builder, &content, NodeCategory::End, line_num)?,
            "connection" => process_connection(&mut builder, &content, line_num)?,
            other => {
                return Err(ParseError::UnknownRecordType {
                    line: line_num,
                    record: other.to_string(),
                })
            }
        }
    }

    builder.build().map_err(ParseError::from)
}

fn process_nb_drones(
    builder: &mut SimulationMapBuilder,
    content: String,
    line: usize,
) -> Result<(), ParseError> {
    if builder.nb_drones().is_some() {
        return Err(ParseError::DuplicateDroneCount { line });
    }

    let value: u32 = content.trim().parse().map_err(|_| ParseError::MalformedRecord {
        line,
        reason: format!("nb_drones value '{}' is not a positive integer", content),
    })?;

    if value == 0 {
        return Err(ParseError::MalformedRecord {
            line,
            reason: "nb_drones must be at least 1".to_string(),
        });
    }

    builder.set_nb_drones(value);
    Ok(())
}

fn process_hub(
    builder: &mut SimulationMapBuilder,
    content: &str,
    category: NodeCategory,
    line: usize,
) -> Result<(), ParseError> {
    if builder.nb_drones().is_none() {
        return Err(ParseError::DroneCountNotYetDefined { line });
    }

    let (mandatory, params) = split_optional_block(content, line)?;
    let tokens: Vec<&str> = mandatory.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(ParseError::MalformedRecord {
            line,
            reason: "hub record needs at least 'name x y'".to_string(),
        });
    }

    let name_raw = tokens[0];
    validate_name(name_raw, line)?;
    let name = HubName::from(name_raw);

    if builder.hub_index(name).is_some() {
        return Err(ParseError::DuplicateHub {
            line,
            name: name_raw.to_string(),
        });
    }

    let x = parse_coord(tokens[1], "x", line)?;
    let y = parse_coord(tokens[2], "y", line)?;

    let mut zone = Zone::Normal;
    let mut color: Option<String> = None;
    let mut max_drones: Option<u32> = None;

    for (key, value) in params {
        match key.as_str() {
            "zone" => {
                zone = Zone::parse(&value).ok_or_else(|| ParseError::InvalidParameterValue {
                    line,
                    key: "zone".to_string(),
                    value: value.clone(),
                })?;
            }
            "color" => color = Some(value.clone()),
            "max_drones" => {
                let parsed: u32 = value.parse().map_err(|_| ParseError::InvalidParameterValue {
                    line,
                    key: "max_drones".to_string(),
                    value: value.clone(),
                })?;
                if parsed == 0 {
                    return Err(ParseError::InvalidParameterValue {
                        line,
                        key: "max_drones".to_string(),
                        value: value.clone(),
                    });
                }
                max_drones = Some(parsed);
            }
            other => {
                return Err(ParseError::UnknownParameter {
                    line,
                    key: other.to_string(),
                })
            }
        }
    }

    let max_drones = max_drones.unwrap_or_else(|| {
        if matches!(category, NodeCategory::Start | NodeCategory::End) {
            builder.nb_drones().unwrap_or(1)
        } else {
            1
        }
    });

    if matches!(category, NodeCategory::Start | NodeCategory::End) {
        let label = if matches!(category, NodeCategory::Start) {
            "start"
        } else {
            "end"
        };
        let already_present = builder_has_category(builder, category);
        if already_present {
            return Err(ParseError::DuplicateCategoryHub { line, category: label });
        }
    }

    builder
        .add_hub(name, x, y, max_drones, zone, category, color)
        .expect("duplicate hub name already rejected above");

    Ok(())
}

fn builder_has_category(builder: &SimulationMapBuilder, category: NodeCategory) -> bool {
    builder.hubs_iter().any(|h| match category {
        NodeCategory::Start => h.category().is_start(),
        NodeCategory::End => h.category().is_end(),
        NodeCategory::Intermediate => false,
    })
}

fn process_connection(
    builder: &mut SimulationMapBuilder,
    content: &str,
    line: usize,
) -> Result<(), ParseError> {
    if builder.nb_drones().is_none() {
        return Err(ParseError::DroneCountNotYetDefined { line });
    }

    let (mandatory, params) = split_optional_block(content, line)?;
    let mandatory = mandatory.trim();
    if mandatory.is_empty() {
        return Err(ParseError::MalformedRecord {
            line,
            reason: "missing connection endpoints".to_string(),
        });
    }

    let dash_count = mandatory.matches('-').count();
    if dash_count != 1 {
        return Err(ParseError::MalformedRecord {
            line,
            reason: format!("invalid connection format '{}', expected 'source-target'", mandatory),
        });
    }

    let (source_raw, target_raw) = mandatory.split_once('-').unwrap();
    if source_raw.is_empty() || target_raw.is_empty() {
        return Err(ParseError::MalformedRecord {
            line,
            reason: "both source and target names are required".to_string(),
        });
    }

    if source_raw == target_raw {
        return Err(ParseError::SelfLoopConnection { line });
    }

    let source = builder
        .hub_index(connection_hub_name(source_raw, line)?)
        .ok_or_else(|| ParseError::UndefinedHub {
            line,
            name: source_raw.to_string(),
        })?;
    let target = builder
        .hub_index(connection_hub_name(target_raw, line)?)
        .ok_or_else(|| ParseError::UndefinedHub {
            line,
            name: target_raw.to_string(),
        })?;

    let mut max_link_capacity: u32 = 1;
    for (key, value) in params {
        match key.as_str() {
            "max_link_capacity" => {
                let parsed: u32 = value.parse().map_err(|_| ParseError::InvalidParameterValue {
                    line,
                    key: "max_link_capacity".to_string(),
                    value: value.clone(),
                })?;
                if parsed == 0 {
                    return Err(ParseError::InvalidParameterValue {
                        line,
                        key: "max_link_capacity".to_string(),
                        value: value.clone(),
                    });
                }
                max_link_capacity = parsed;
            }
            other => {
                return Err(ParseError::UnknownParameter {
                    line,
                    key: other.to_string(),
                })
            }
        }
    }

    if !builder.add_connection(source, target, max_link_capacity) {
        return Err(ParseError::DuplicateConnection {
            line,
            source: source_raw.to_string(),
            target: target_raw.to_string(),
        });
    }

    Ok(())
}

/// Splits a record's content into the mandatory field(s) and the parsed
/// `key=value` optional block, if any `[...]` block is present at the end
/// of the line. Unlike the original parser's fixed-maxsplit tokenizing,
/// this locates the brackets directly so a block may contain any number
/// of space-separated pairs regardless of how many mandatory fields
/// precede it.
fn split_optional_block(
    content: &str,
    line: usize,
) -> Result<(String, Vec<(String, String)>), ParseError> {
    let trimmed = content.trim();
    let Some(open) = trimmed.find('[') else {
        return Ok((trimmed.to_string(), Vec::new()));
    };

    if !trimmed.ends_with(']') {
        return Err(ParseError::MalformedOptionalBlock { line });
    }

    let mandatory = trimmed[..open].trim().to_string();
    let block = &trimmed[open + 1..trimmed.len() - 1];
    let block = block.trim();

    let mut pairs = Vec::new();
    if !block.is_empty() {
        for pair in block.split_whitespace() {
            let (key, value) = pair.split_once('=').ok_or_else(|| ParseError::MalformedKeyValue {
                line,
                pair: pair.to_string(),
            })?;
            pairs.push((key.to_string(), value.to_string()));
        }
    }

    Ok((mandatory, pairs))
}

fn validate_name(name: &str, line: usize) -> Result<(), ParseError> {
    if name.is_empty() || name.contains(' ') || name.contains('-') || name.len() > 32 {
        return Err(ParseError::InvalidName {
            line,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Builds a [`HubName`] for a connection endpoint, rejecting names the
/// fixed-capacity `CopyStr` backing store can't hold instead of letting
/// it panic.
fn connection_hub_name(raw: &str, line: usize) -> Result<HubName, ParseError> {
    if raw.len() > 32 {
        return Err(ParseError::InvalidName {
            line,
            name: raw.to_string(),
        });
    }
    Ok(HubName::from(raw))
}

fn parse_coord(raw: &str, axis: &str, line: usize) -> Result<i32, ParseError> {
    let value: i32 = raw.parse().map_err(|_| ParseError::InvalidParameterValue {
        line,
        key: axis.to_string(),
        value: raw.to_string(),
    })?;
    if value < 0 {
        return Err(ParseError::InvalidParameterValue {
            line,
            key: axis.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}
