use std::fmt;

/// Which family of logs a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Per-job logs written by the Slurm executor
    Slurm,
    /// Run logs written by Snakemake itself
    Snakemake,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Slurm, Category::Snakemake];

    /// Letter used in identifiers such as `S1` or `M3`
    pub fn tag(self) -> char {
        match self {
            Category::Slurm => 'S',
            Category::Snakemake => 'M',
        }
    }

    /// Case-insensitive lookup of a category by its identifier letter
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'S' => Some(Category::Slurm),
            'M' => Some(Category::Snakemake),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Slurm => "Slurm",
            Category::Snakemake => "Snakemake",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
