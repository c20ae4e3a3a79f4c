use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::media_type_for;
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use peoplebook_core::dto::PictureDto;
use peoplebook_core::{ImageBlob, ImageState};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum PictureCommand {
    /// Upload a PNG as the profile picture
    Set(SetPictureArgs),
    Show,
    /// Write the stored picture to a file
    Export(ExportPictureArgs),
}

#[derive(Debug, Args)]
pub struct SetPictureArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportPictureArgs {
    pub out: PathBuf,
}

pub fn set_picture(ctx: &Context<'_>, args: SetPictureArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("read picture {}", args.file.display()))?;
    let blob = ImageBlob::new(media_type_for(&args.file), bytes);

    let state = ctx.store.image().set(&blob)?;
    if ctx.json {
        return print_json(&picture_dto(&state)?);
    }
    println!("profile picture updated ({} bytes)", blob.bytes.len());
    Ok(())
}

pub fn show_picture(ctx: &Context<'_>) -> Result<()> {
    let state = ctx.store.image().state();
    if ctx.json {
        return print_json(&picture_dto(&state)?);
    }
    match state.data_uri {
        Some(data_uri) => println!("{}", data_uri),
        None => println!("no profile picture"),
    }
    Ok(())
}

pub fn export_picture(ctx: &Context<'_>, args: ExportPictureArgs) -> Result<()> {
    let blob = ctx
        .store
        .image()
        .state()
        .decode()?
        .ok_or_else(|| not_found("no profile picture"))?;
    fs::write(&args.out, &blob.bytes)
        .with_context(|| format!("write picture {}", args.out.display()))?;

    if ctx.json {
        return print_json(&serde_json::json!({
            "output": args.out.display().to_string(),
            "size_bytes": blob.bytes.len(),
        }));
    }
    println!("profile picture written to {}", args.out.display());
    Ok(())
}

fn picture_dto(state: &ImageState) -> Result<PictureDto> {
    let blob = state.decode()?;
    Ok(PictureDto {
        present: blob.is_some(),
        media_type: blob.as_ref().map(|blob| blob.media_type.clone()),
        size_bytes: blob.as_ref().map(|blob| blob.bytes.len()),
        data_uri: state.data_uri.clone(),
    })
}
