//! Shared constants for booklet imposition

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Logical pages carried by one folded sheet (two per face)
pub const PAGES_PER_SHEET: usize = 4;

/// Logical pages on one face of a sheet
pub const PAGES_PER_FACE: usize = 2;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Page Tree
// =============================================================================

/// Upper bound on `Parent` links followed when resolving inherited page
/// attributes. Guards against cyclic page trees in malformed files.
pub const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];
