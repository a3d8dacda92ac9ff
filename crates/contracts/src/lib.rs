//! Lookup of compiled contract artifacts as they are written by Hardhat
//! (`artifacts/contracts/<Source>.sol/<Name>.json`) and Foundry
//! (`out/<Source>.sol/<Name>.json`).

pub mod artifact;

pub use artifact::{Artifact, ArtifactError};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Hardhat keeps the full compiler input and output in this directory. Its
/// files never hold a single contract.
const BUILD_INFO: &str = "build-info";

/// A directory tree of compiled contract artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    root: PathBuf,
}

impl Artifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds and parses the artifact of the contract with the given name.
    ///
    /// Fails if there is no such artifact or if more than one source file
    /// defines a contract with that name.
    pub fn find(&self, name: &str) -> Result<Artifact, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::MissingDirectory(self.root.clone()));
        }

        let file_name = format!("{name}.json");
        let mut paths = Vec::new();
        collect(&self.root, &file_name, &mut paths)?;
        paths.sort();

        match paths.as_slice() {
            [] => Err(ArtifactError::NotFound {
                name: name.to_string(),
                root: self.root.clone(),
            }),
            [path] => {
                tracing::debug!(?path, "found artifact");
                Artifact::from_file(path)
            }
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_string(),
                paths,
            }),
        }
    }
}

fn collect(dir: &Path, file_name: &str, found: &mut Vec<PathBuf>) -> Result<(), ArtifactError> {
    let io_error = |source| ArtifactError::Io {
        path: dir.to_owned(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if entry.file_type().map_err(io_error)?.is_dir() {
            if entry.file_name() != BUILD_INFO {
                collect(&path, file_name, found)?;
            }
        } else if entry.file_name() == file_name {
            found.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::TempDir};

    const HARDHAT_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "RealEstateTokenization",
        "abi": [],
        "bytecode": "0x6080604052"
    }"#;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn finds_nested_hardhat_artifact() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "contracts/RealEstateTokenization.sol/RealEstateTokenization.json",
            HARDHAT_ARTIFACT,
        );
        write(
            dir.path(),
            "contracts/RealEstateTokenization.sol/RealEstateTokenization.dbg.json",
            r#"{"_format": "hh-sol-dbg-1", "buildInfo": "../../build-info/abc.json"}"#,
        );
        write(
            dir.path(),
            "build-info/RealEstateTokenization.json",
            r#"{"id": "abc"}"#,
        );

        let artifact = Artifacts::new(dir.path())
            .find("RealEstateTokenization")
            .unwrap();

        assert_eq!(artifact.contract_name, "RealEstateTokenization");
        assert_eq!(
            artifact.path,
            dir.path()
                .join("contracts/RealEstateTokenization.sol/RealEstateTokenization.json")
        );
    }

    #[test]
    fn unknown_contract_is_not_found() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "contracts/RealEstateTokenization.sol/RealEstateTokenization.json",
            HARDHAT_ARTIFACT,
        );

        let result = Artifacts::new(dir.path()).find("Unknown");

        assert!(matches!(result, Err(ArtifactError::NotFound { name, .. }) if name == "Unknown"));
    }

    #[test]
    fn same_name_in_two_sources_is_ambiguous() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "contracts/A.sol/Token.json", HARDHAT_ARTIFACT);
        write(dir.path(), "contracts/B.sol/Token.json", HARDHAT_ARTIFACT);

        let result = Artifacts::new(dir.path()).find("Token");

        assert!(matches!(result, Err(ArtifactError::Ambiguous { paths, .. }) if paths.len() == 2));
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("artifacts");

        let result = Artifacts::new(&root).find("RealEstateTokenization");

        assert!(matches!(result, Err(ArtifactError::MissingDirectory(path)) if path == root));
    }
}
