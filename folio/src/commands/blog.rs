use anyhow::{bail, Context};
use clap::Subcommand;
use folio_config::Config;
use folio_core_blog_contracts::{BlogCreateError, BlogFeatureService};
use folio_models::blog::{BlogCategory, BlogPostCreate};

use crate::{database, environment};

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    /// Create a new blog post
    #[command(aliases(["c", "new", "n", "+"]))]
    Create {
        /// Blog post title; the slug is derived from it
        title: String,
        /// Blog post description shown on the listing card
        description: String,
        /// Comma-separated categories
        #[arg(long, default_value = "General")]
        categories: String,
        /// Read time in minutes
        #[arg(long, default_value_t = 5)]
        read_time: u32,
        /// Blog post content (HTML)
        #[arg(long, default_value = "")]
        content: String,
        /// Cover image path
        #[arg(long)]
        cover_image: Option<String>,
    },
}

impl BlogCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            BlogCommand::Create {
                title,
                description,
                categories,
                read_time,
                content,
                cover_image,
            } => {
                create(
                    config,
                    BlogPostCreate {
                        title: title.try_into().context("Invalid title")?,
                        description: description.try_into().context("Invalid description")?,
                        content: content.try_into().context("Invalid content")?,
                        categories: parse_categories(&categories)?,
                        read_time: read_time.try_into().context("Invalid read time")?,
                        cover_image: cover_image
                            .map(TryInto::try_into)
                            .transpose()
                            .context("Invalid cover image path")?,
                    },
                )
                .await
            }
        }
    }
}

async fn create(config: Config, post: BlogPostCreate) -> anyhow::Result<()> {
    let database = database::connect(&config.database).await?;
    database.setup().await?;

    let blog = environment::blog_feature(&config, database);

    match blog.create(post).await {
        Ok((id, slug)) => {
            println!("Successfully created blog post {} (id {})", *slug, *id);
            println!("URL: /blog/{}", *slug);
            Ok(())
        }
        Err(BlogCreateError::SlugConflict(slug)) => {
            bail!("A blog post with slug {:?} already exists", *slug)
        }
        Err(BlogCreateError::Other(err)) => Err(err),
    }
}

fn parse_categories(raw: &str) -> anyhow::Result<folio_models::blog::BlogCategories> {
    raw.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| BlogCategory::try_new(x).context("Invalid category"))
        .collect::<anyhow::Result<Vec<_>>>()?
        .try_into()
        .context("Too many categories")
}
