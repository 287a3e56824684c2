use core::fmt;
use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};

use serde::{Serialize, Serializer};

/// Implemented by every typed object so that heterogeneous collections can be
/// narrowed to one kind without unchecked casts.
pub trait ObjectKind: Sized + 'static {
    const ISA: Isa;

    fn downcast(object: &AnyObject) -> Option<&Self>;
}

macro_rules! pbx_objects {
    (
        $(
            $(#[$outer:meta])*
            $isa:literal => pub struct $name:ident {
                $(
                    $(#[$field_attr:meta])*
                    pub $field_name:ident : $field_ty:ty
                ),* $(,)?
            }
        )+
    ) => {
        /// Discriminator of a record, read from its `isa` field.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum Isa {
            $( $name, )+
        }

        impl Isa {
            pub const ALL: &'static [Isa] = &[ $( Isa::$name, )+ ];

            /// The raw discriminator as written in project files.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Isa::$name => $isa, )+
                }
            }

            /// Maps a raw discriminator to its tag, `None` for kinds not modeled here.
            #[must_use]
            pub fn from_isa(isa: &str) -> Option<Self> {
                match isa {
                    $( $isa => Some(Isa::$name), )+
                    _ => None,
                }
            }
        }

        $(
            $(#[$outer])*
            #[derive(Clone, PartialEq, Eq, Debug, Serialize)]
            pub struct $name {
                /// Identifier of the record in the object table.
                pub key: String,
                $(
                    $(#[$field_attr])*
                    pub $field_name : $field_ty,
                )*
            }

            impl ObjectKind for $name {
                const ISA: Isa = Isa::$name;

                fn downcast(object: &AnyObject) -> Option<&Self> {
                    if let AnyObject::$name(node) = object {
                        Some(node)
                    } else {
                        None
                    }
                }
            }

            impl From<$name> for AnyObject {
                fn from(node: $name) -> Self {
                    AnyObject::$name(node)
                }
            }
        )+

        /// Tagged union over every modeled object kind.
        #[derive(Clone, PartialEq, Eq, Debug, Serialize)]
        #[serde(tag = "isa")]
        pub enum AnyObject {
            $(
                #[serde(rename = $isa)]
                $name($name),
            )+
        }

        impl AnyObject {
            #[must_use]
            pub fn isa(&self) -> Isa {
                match self {
                    $( AnyObject::$name(_) => Isa::$name, )+
                }
            }

            #[must_use]
            pub fn key(&self) -> &str {
                match self {
                    $( AnyObject::$name(node) => &node.key, )+
                }
            }
        }
    };
}

macro_rules! raw_string_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $( $(#[$arm_attr:meta])* $arm:ident = $raw:literal, )+
            @unknown $unknown:ident = $unknown_raw:literal,
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
        pub enum $name {
            $( $(#[$arm_attr])* $arm, )+
            #[default]
            $unknown,
        }

        impl $name {
            /// Maps a raw string, falling back to the unknown variant.
            #[must_use]
            pub fn from_raw(raw: &str) -> Self {
                match raw {
                    $( $raw => $name::$arm, )+
                    _ => $name::$unknown,
                }
            }

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$arm => $raw, )+
                    $name::$unknown => $unknown_raw,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

raw_string_enum! {
    /// Classified `lastKnownFileType` of a file reference.
    pub enum FileKind {
        SourceCodeHeader = "sourcecode.c.h",
        SourceCodeSwift = "sourcecode.swift",
        SourceCodeObjC = "sourcecode.c.objc",
        SourceCodeObjCPlusPlus = "sourcecode.cpp.objcpp",
        SourceCodeCPlusPlus = "sourcecode.cpp.cpp",
        Framework = "wrapper.framework",
        Bundle = "wrapper.cfbundle",
        Application = "wrapper.application",
        PropertyListStrings = "text.plist.strings",
        PropertyListXml = "text.plist.xml",
        Storyboard = "file.storyboard",
        Xib = "file.xib",
        ImagePng = "image.png",
        ImageJpeg = "image.jpeg",
        Archive = "archive.ar",
        Html = "text.html",
        Css = "text.css",
        Xml = "text.xml",
        Text = "text",
        XcodeProject = "wrapper.pb-project",
        XcodeConfig = "text.xcconfig",
        ReferenceFolder = "folder",
        File = "file",
        AssetCatalog = "folder.assetcatalog",
        @unknown Unknown = "unknown",
    }
}

raw_string_enum! {
    /// Product type of a native target.
    pub enum ProductType {
        Application = "com.apple.product-type.application",
        UnitTestBundle = "com.apple.product-type.bundle.unit-test",
        Framework = "com.apple.product-type.framework",
        StaticLibrary = "com.apple.product-type.library.static",
        Tool = "com.apple.product-type.tool",
        @unknown Unknown = "unknown",
    }
}

/// Coarse grouping of [`FileKind`]s.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FileCategory {
    Source,
    Header,
    Resource,
    Bundle,
    Other,
}

impl FileKind {
    #[must_use]
    pub fn category(self) -> FileCategory {
        match self {
            FileKind::SourceCodeSwift
            | FileKind::SourceCodeObjC
            | FileKind::SourceCodeObjCPlusPlus
            | FileKind::SourceCodeCPlusPlus => FileCategory::Source,
            FileKind::SourceCodeHeader => FileCategory::Header,
            FileKind::PropertyListStrings
            | FileKind::PropertyListXml
            | FileKind::Storyboard
            | FileKind::Xib
            | FileKind::ImagePng
            | FileKind::ImageJpeg
            | FileKind::Html
            | FileKind::Css
            | FileKind::Xml
            | FileKind::Text
            | FileKind::AssetCatalog
            | FileKind::ReferenceFolder => FileCategory::Resource,
            FileKind::Framework | FileKind::Bundle | FileKind::Application => {
                FileCategory::Bundle
            }
            FileKind::Archive
            | FileKind::XcodeProject
            | FileKind::XcodeConfig
            | FileKind::File
            | FileKind::Unknown => FileCategory::Other,
        }
    }
}

pbx_objects! {

    /// Root metadata of a project.
    "PBXProject" => pub struct Project {
        pub development_region: Option<String>,
        pub known_regions: Vec<String>,
        pub project_dir_path: String,
        /// Identifier of the root group of the file hierarchy.
        pub main_group: Option<String>,
        /// Directory that contains the `.xcodeproj` bundle, when loaded from disk.
        pub path: Option<PathBuf>,
    }

    "PBXGroup" => pub struct Group {
        pub path: Option<String>,
        pub name: Option<String>,
        pub source_tree: String,
        /// Child identifiers in file order.
        pub children: Vec<String>,
    }

    /// A localized file: one child reference per region.
    "PBXVariantGroup" => pub struct VariantGroup {
        pub name: String,
        pub source_tree: String,
        pub children: Vec<String>,
    }

    "PBXFileReference" => pub struct FileReference {
        pub path: Option<String>,
        pub name: Option<String>,
        pub explicit_file_type: Option<String>,
        pub last_known_file_type: Option<String>,
        pub file_encoding: i64,
        pub source_tree: String,
        pub kind: FileKind,
    }

    "PBXBuildFile" => pub struct BuildFile {
        /// Identifier of the referenced file.
        pub file_ref: String,
    }

    "PBXNativeTarget" => pub struct NativeTarget {
        pub name: String,
        pub product_name: Option<String>,
        pub product_type: ProductType,
        pub build_phases: Vec<String>,
        pub build_configuration_list: Option<String>,
    }

    "PBXFrameworksBuildPhase" => pub struct FrameworksBuildPhase {
        pub build_action_mask: i64,
        /// Build file identifiers in file order.
        pub files: Vec<String>,
        pub run_only_for_deployment_postprocessing: bool,
    }

    "PBXResourcesBuildPhase" => pub struct ResourcesBuildPhase {}

    "PBXShellScriptBuildPhase" => pub struct ShellScriptBuildPhase {}

    "PBXSourcesBuildPhase" => pub struct SourcesBuildPhase {}

    "XCBuildConfiguration" => pub struct BuildConfiguration {}

    "XCConfigurationList" => pub struct ConfigurationList {}
}

impl Display for Isa {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Isa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Isa {
    /// Whether objects of this kind own an ordered list of children.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Isa::Group | Isa::VariantGroup)
    }
}
