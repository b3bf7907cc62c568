/// File classification for extension-based directory sorting.
///
/// Maps a file's extension to the subfolder it should be relocated into,
/// under one of two interchangeable strategies: one folder per extension,
/// or a fixed lookup table covering common file types.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::{FileClassifier, SortMode};
///
/// let classifier = FileClassifier::new(SortMode::ByCategory);
/// assert_eq!(classifier.classify("jpg"), Some("Images".to_string()));
/// assert_eq!(classifier.classify("xyz"), None);
/// ```
use std::collections::HashMap;

/// Strategy selecting how destination folders are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// One folder per extension, named `<Ext> Files`.
    ByExtension,
    /// Fixed extension table mapping to broad categories; unknown
    /// extensions stay in place.
    ByCategory,
}

/// Broad file categories used by [`SortMode::ByCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (PNG, JPG, GIF, etc.)
    Image,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Video files (MP4, MKV, AVI, etc.)
    Video,
    /// Document files (PDF, DOCX, TXT, etc.)
    Document,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archive,
    /// Source code files (Rust, Python, JavaScript, etc.)
    Code,
    /// Spreadsheet files (XLSX, CSV, ODS, etc.)
    Spreadsheet,
    /// Presentation files (PPTX, ODP, etc.)
    Presentation,
    /// Font files (TTF, OTF, WOFF, etc.)
    Font,
}

impl Category {
    /// Returns the destination folder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Image.dir_name(), "Images");
    /// assert_eq!(Category::Archive.dir_name(), "Archives");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Image => "Images",
            Category::Audio => "Audio",
            Category::Video => "Videos",
            Category::Document => "Documents",
            Category::Archive => "Archives",
            Category::Code => "Code",
            Category::Spreadsheet => "Spreadsheets",
            Category::Presentation => "Presentations",
            Category::Font => "Fonts",
        }
    }
}

/// Extracts the classification key from a file name.
///
/// The key is everything after the last `.`; a name with no dot, or with
/// nothing after it, yields an empty key. A leading-dot-only name like
/// `.bashrc` yields `bashrc`, though such names are hidden and normally
/// filtered out before reaching this point.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::extension_key;
///
/// assert_eq!(extension_key("a.tar.gz"), "gz");
/// assert_eq!(extension_key("README"), "");
/// assert_eq!(extension_key("archive."), "");
/// ```
pub fn extension_key(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => "",
    }
}

/// Uppercases the first code point of `s`, leaving the remainder unchanged.
/// Empty input yields empty output. Applying it twice changes nothing.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats the per-extension destination folder name.
///
/// `txt` becomes `Txt Files`; the extension's own casing beyond the first
/// letter is preserved, so `JPG` becomes `JPG Files`. An empty key produces
/// the literal folder name ` Files`, leading space included; extension-less
/// files are not special-cased.
pub fn extension_folder_name(ext: &str) -> String {
    capitalize(&format!("{} Files", capitalize(ext)))
}

/// Maps known file extensions to their [`Category`].
///
/// Lookups are case-insensitive. Extensions outside the table have no
/// category; the caller decides what a miss means.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    extensions: HashMap<String, Category>,
}

impl CategoryTable {
    /// Creates a table with the standard extension mappings.
    pub fn new() -> Self {
        let mut table = Self {
            extensions: HashMap::new(),
        };
        table.populate_standard_mappings();
        table
    }

    fn populate_standard_mappings(&mut self) {
        // Images
        self.add("png", Category::Image);
        self.add("jpg", Category::Image);
        self.add("jpeg", Category::Image);
        self.add("gif", Category::Image);
        self.add("webp", Category::Image);
        self.add("svg", Category::Image);
        self.add("bmp", Category::Image);
        self.add("tiff", Category::Image);
        self.add("ico", Category::Image);
        self.add("heic", Category::Image);

        // Audio
        self.add("mp3", Category::Audio);
        self.add("wav", Category::Audio);
        self.add("ogg", Category::Audio);
        self.add("flac", Category::Audio);
        self.add("aac", Category::Audio);
        self.add("m4a", Category::Audio);
        self.add("wma", Category::Audio);

        // Videos
        self.add("mp4", Category::Video);
        self.add("mkv", Category::Video);
        self.add("avi", Category::Video);
        self.add("mov", Category::Video);
        self.add("flv", Category::Video);
        self.add("wmv", Category::Video);
        self.add("webm", Category::Video);
        self.add("3gp", Category::Video);

        // Documents
        self.add("pdf", Category::Document);
        self.add("txt", Category::Document);
        self.add("doc", Category::Document);
        self.add("docx", Category::Document);
        self.add("html", Category::Document);
        self.add("htm", Category::Document);
        self.add("md", Category::Document);
        self.add("rtf", Category::Document);
        self.add("odt", Category::Document);

        // Archives
        self.add("zip", Category::Archive);
        self.add("rar", Category::Archive);
        self.add("7z", Category::Archive);
        self.add("tar", Category::Archive);
        self.add("gz", Category::Archive);
        self.add("bz2", Category::Archive);
        self.add("xz", Category::Archive);

        // Code
        self.add("py", Category::Code);
        self.add("java", Category::Code);
        self.add("c", Category::Code);
        self.add("cpp", Category::Code);
        self.add("h", Category::Code);
        self.add("hpp", Category::Code);
        self.add("js", Category::Code);
        self.add("ts", Category::Code);
        self.add("rs", Category::Code);
        self.add("go", Category::Code);
        self.add("sh", Category::Code);
        self.add("json", Category::Code);
        self.add("xml", Category::Code);
        self.add("yaml", Category::Code);
        self.add("yml", Category::Code);
        self.add("toml", Category::Code);

        // Spreadsheets
        self.add("csv", Category::Spreadsheet);
        self.add("xls", Category::Spreadsheet);
        self.add("xlsx", Category::Spreadsheet);
        self.add("ods", Category::Spreadsheet);

        // Presentations
        self.add("ppt", Category::Presentation);
        self.add("pptx", Category::Presentation);
        self.add("odp", Category::Presentation);

        // Fonts
        self.add("ttf", Category::Font);
        self.add("otf", Category::Font);
        self.add("woff", Category::Font);
        self.add("woff2", Category::Font);
    }

    fn add(&mut self, ext: &str, category: Category) {
        self.extensions.insert(ext.to_lowercase(), category);
    }

    /// Looks up the category for an extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::{Category, CategoryTable};
    ///
    /// let table = CategoryTable::new();
    /// assert_eq!(table.lookup("pdf"), Some(Category::Document));
    /// assert_eq!(table.lookup("PNG"), Some(Category::Image));
    /// assert_eq!(table.lookup("xyz"), None);
    /// ```
    pub fn lookup(&self, ext: &str) -> Option<Category> {
        self.extensions.get(&ext.to_lowercase()).copied()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies extension keys into destination folders under a fixed strategy.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    mode: SortMode,
    table: CategoryTable,
}

impl FileClassifier {
    /// Creates a classifier for the given strategy.
    pub fn new(mode: SortMode) -> Self {
        Self {
            mode,
            table: CategoryTable::new(),
        }
    }

    /// Returns the destination folder for an extension key, or `None` when
    /// the file should stay where it is.
    ///
    /// Under [`SortMode::ByExtension`] every key has a destination,
    /// including the empty one. Under [`SortMode::ByCategory`] only keys in
    /// the table produce a destination; a miss is a normal outcome, not an
    /// error.
    pub fn classify(&self, ext: &str) -> Option<String> {
        match self.mode {
            SortMode::ByExtension => Some(extension_folder_name(ext)),
            SortMode::ByCategory => self.table.lookup(ext).map(|c| c.dir_name().to_string()),
        }
    }
}
