/// Raw bytes of an uploaded recording. No format validation is performed.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    data: Vec<u8>,
    file_name: Option<String>,
    content_type: Option<String>,
}

impl AudioPayload {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}
