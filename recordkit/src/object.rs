use crate::error::{Error, Result};
use crate::record::{Map, Object, Record};

fn target_object(target: &mut Record) -> Result<&mut Object> {
    let kind = target.kind();
    target
        .as_object_mut()
        .ok_or_else(|| Error::invalid_input("", kind))
}

fn source_members(src: &Record) -> Result<Option<&Map>> {
    match src {
        Record::Null => Ok(None),
        Record::Map(map) => Ok(Some(map)),
        Record::Object(object) => Ok(Some(object.members())),
        other => Err(Error::invalid_input("", other.kind())),
    }
}

/// Copies every member of `src` into the object `target`, overwriting the
/// ones it already has. A null `src` changes nothing.
pub fn extend(target: &mut Record, src: &Record) -> Result<()> {
    let object = target_object(target)?;
    let Some(members) = source_members(src)? else {
        return Ok(());
    };

    for (name, value) in members {
        object.insert(name.clone(), value.clone());
    }

    Ok(())
}

/// Like [`extend`], but only for members `target` already declares.
pub fn extend_existing(target: &mut Record, src: &Record) -> Result<()> {
    let object = target_object(target)?;
    let Some(members) = source_members(src)? else {
        return Ok(());
    };

    for (name, value) in members {
        if let Some(slot) = object.get_mut(name) {
            *slot = value.clone();
        }
    }

    Ok(())
}
