use {
    alloy::{json_abi::JsonAbi, primitives::Bytes},
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// A compiled contract: its interface and the code that creates it.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Creation bytecode. Sent as the input of the deployment transaction.
    pub bytecode: Bytes,
    pub path: PathBuf,
}

/// On-disk layout shared by Hardhat and Foundry. Hardhat stores the
/// bytecode as a hex string, Foundry as an object with the hex string in
/// `object`. Foundry does not store the contract name.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl From<RawBytecode> for Bytes {
    fn from(value: RawBytecode) -> Self {
        match value {
            RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
        }
    }
}

impl Artifact {
    /// Reads and parses the artifact at `path`. The contract name falls back
    /// to the file stem when the artifact does not record one.
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        let data = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&data, path)
    }

    fn from_json(data: &str, path: &Path) -> Result<Self, ArtifactError> {
        let raw: RawArtifact =
            serde_json::from_str(data).map_err(|source| ArtifactError::Malformed {
                path: path.to_owned(),
                source,
            })?;
        let contract_name = raw.contract_name.unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        Ok(Self {
            contract_name,
            abi: raw.abi,
            bytecode: raw.bytecode.into(),
            path: path.to_owned(),
        })
    }

    /// Checks that the contract can be deployed without constructor
    /// arguments.
    pub fn deployable(&self) -> Result<(), ArtifactError> {
        if self.bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode(self.contract_name.clone()));
        }
        let inputs = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.len())
            .unwrap_or_default();
        if inputs > 0 {
            return Err(ArtifactError::ConstructorArguments {
                name: self.contract_name.clone(),
                inputs,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact directory {0:?} does not exist")]
    MissingDirectory(PathBuf),
    #[error("no artifact for contract {name} under {root:?}")]
    NotFound { name: String, root: PathBuf },
    #[error("artifact name {name} is ambiguous: {paths:?}")]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("contract {0} has no creation bytecode")]
    NoBytecode(String),
    #[error("constructor of {name} takes {inputs} argument(s) but none are passed")]
    ConstructorArguments { name: String, inputs: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<Artifact, ArtifactError> {
        Artifact::from_json(data, Path::new("out/Token.sol/Token.json"))
    }

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = parse(
            r#"{
                "_format": "hh-sol-artifact-1",
                "contractName": "RealEstateTokenization",
                "sourceName": "contracts/RealEstateTokenization.sol",
                "abi": [],
                "bytecode": "0x6080604052",
                "deployedBytecode": "0x6080",
                "linkReferences": {},
                "deployedLinkReferences": {}
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.contract_name, "RealEstateTokenization");
        assert_eq!(artifact.bytecode.as_ref(), [0x60, 0x80, 0x60, 0x40, 0x52]);
        artifact.deployable().unwrap();
    }

    #[test]
    fn parses_foundry_artifact() {
        let artifact = parse(
            r#"{
                "abi": [{"type": "constructor", "inputs": [], "stateMutability": "nonpayable"}],
                "bytecode": {"object": "0x60806040", "sourceMap": "", "linkReferences": {}},
                "deployedBytecode": {"object": "0x6080", "sourceMap": "", "linkReferences": {}}
            }"#,
        )
        .unwrap();

        assert_eq!(artifact.contract_name, "Token");
        assert_eq!(artifact.bytecode.len(), 4);
        artifact.deployable().unwrap();
    }

    #[test]
    fn interface_is_not_deployable() {
        let artifact = parse(r#"{"contractName": "IToken", "abi": [], "bytecode": "0x"}"#).unwrap();

        assert!(matches!(
            artifact.deployable(),
            Err(ArtifactError::NoBytecode(name)) if name == "IToken"
        ));
    }

    #[test]
    fn constructor_with_arguments_is_not_deployable() {
        let artifact = parse(
            r#"{
                "contractName": "Token",
                "abi": [{
                    "type": "constructor",
                    "stateMutability": "nonpayable",
                    "inputs": [
                        {"name": "owner", "type": "address", "internalType": "address"},
                        {"name": "supply", "type": "uint256", "internalType": "uint256"}
                    ]
                }],
                "bytecode": "0x6080"
            }"#,
        )
        .unwrap();

        assert!(matches!(
            artifact.deployable(),
            Err(ArtifactError::ConstructorArguments { inputs: 2, .. })
        ));
    }

    #[test]
    fn unlinked_library_placeholder_is_malformed() {
        let result = parse(
            r#"{
                "contractName": "Token",
                "abi": [],
                "bytecode": "0x6080__$1234567890abcdef1234567890abcdef12$__6040"
            }"#,
        );

        assert!(matches!(result, Err(ArtifactError::Malformed { .. })));
    }
}
