use serde::{Deserialize, Serialize};

use super::{ConfigSerializer, ConfigSource, FileConfigSource, Validate, YamlConfigSerializer};

pub struct ConfigManager<TSource = FileConfigSource>
where
    TSource: ConfigSource,
{
    serializer: YamlConfigSerializer,
    source: TSource,
}

impl ConfigManager<FileConfigSource> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileConfigSource::new(file_path.to_string()))
    }
}

impl<TSource> ConfigManager<TSource>
where
    TSource: ConfigSource,
{
    pub fn new(source: TSource) -> Self {
        Self {
            serializer: YamlConfigSerializer,
            source,
        }
    }

    // An absent source yields the default config; a present but invalid one
    // is an error.
    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    {
        match self.source.read()? {
            Some(content) => {
                let config: TConfig = self.serializer.deserialize(&content)?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                Ok(config)
            }
            None => Ok(TConfig::default()),
        }
    }

    pub fn save<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate,
    {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = self.serializer.serialize(config)?;
        self.source.write(&content)
    }
}
