use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pixelprompt::{image_query, PromptStyle, DEFAULT_MODEL};
use pixelprompt_render::{PixelPrompt, RenderConfig};

/// Render text as token-efficient PNG images for vision models.
#[derive(Parser, Debug)]
#[command(name = "pixelprompt", version)]
#[command(about = "Render text as token-efficient images and compare input costs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render text to PNG pages or API content blocks
    Render {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Directory for the PNG pages
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// File name prefix for pages
        #[arg(long, default_value = "page")]
        prefix: String,

        /// Print content blocks as JSON instead of writing files
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Compare text and image input cost
    Compare {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Model used for pricing
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Build a brevity-optimized prompt for image content
    Prompt {
        question: String,

        /// concise, extract, structured, or none
        #[arg(short, long, default_value = "concise")]
        style: String,

        /// Instruction placed before the question
        #[arg(short, long)]
        context: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON render config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// prose, json, code, config, or none
    #[arg(long)]
    content_type: Option<String>,

    #[arg(long)]
    font_size: Option<u32>,

    /// monospace, serif, or sans-serif
    #[arg(long)]
    font_family: Option<String>,

    #[arg(long)]
    max_width: Option<u32>,

    #[arg(long)]
    max_height: Option<u32>,

    /// Always use the full max width
    #[arg(long)]
    fixed_width: bool,

    /// Always use the full max height
    #[arg(long)]
    fixed_height: bool,

    #[arg(long)]
    padding: Option<i32>,

    #[arg(long)]
    line_spacing: Option<i32>,

    /// Keep the input's formatting as-is
    #[arg(long)]
    no_minify: bool,
}

impl RenderArgs {
    fn to_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };
        if let Some(kind) = &self.content_type {
            config.content_type = Some(kind.clone());
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(family) = &self.font_family {
            config.font_family = family.clone();
        }
        if let Some(width) = self.max_width {
            config.max_width = width;
        }
        if let Some(height) = self.max_height {
            config.max_height = height;
        }
        if self.fixed_width {
            config.dynamic_width = false;
        }
        if self.fixed_height {
            config.dynamic_height = false;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(spacing) = self.line_spacing {
            config.line_spacing = spacing;
        }
        if self.no_minify {
            config.minify = false;
        }
        Ok(config)
    }

    fn engine(&self) -> Result<PixelPrompt> {
        Ok(PixelPrompt::new(self.to_config()?)?)
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading {}", input))
}

fn render(input: &str, out_dir: &Path, prefix: &str, json: bool, args: &RenderArgs) -> Result<()> {
    let engine = args.engine()?;
    let images = engine.render(&read_input(input)?)?;
    if json {
        let blocks = images
            .iter()
            .map(|image| image.to_content_block_json())
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    for (idx, image) in images.iter().enumerate() {
        let path = out_dir.join(format!("{}_{:03}.png", prefix, idx + 1));
        image
            .save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!(
            "{} {}x{} {} tokens",
            path.display(),
            image.width(),
            image.height(),
            image.tokens()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            input,
            out_dir,
            prefix,
            json,
            render: args,
        } => render(&input, &out_dir, &prefix, json, &args),
        Command::Compare {
            input,
            model,
            render: args,
        } => {
            let engine = args.engine()?;
            let report = engine.compare(&read_input(&input)?, &model)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Prompt {
            question,
            style,
            context,
        } => {
            let style: PromptStyle = style.parse()?;
            println!("{}", image_query(&question, style, context.as_deref()));
            Ok(())
        }
    }
}
