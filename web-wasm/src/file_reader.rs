//! ブラウザのFileReaderをFutureとして扱う

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};
use recycle_me_common::{Error, ImageSource, Result, SelectedFile};

/// input[type=file] で選択された画像
#[derive(Clone)]
pub struct BrowserImage {
    file: File,
}

impl BrowserImage {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

#[async_trait(?Send)]
impl ImageSource for BrowserImage {
    fn file(&self) -> SelectedFile {
        SelectedFile::new(self.file.name(), self.file.type_(), self.file.size() as u64)
    }

    async fn read_data_url(&self) -> Result<String> {
        read_as_data_url(&self.file).await
    }
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<String>>>>>;

/// FileをData URLとして読み込む
///
/// onload / onerror のどちらか先に来た方で完了する。
pub async fn read_as_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new().map_err(read_error)?;
    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let reader = reader.clone();
        let reply = reply.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            let result = reader
                .result()
                .map_err(read_error)
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| Error::FileRead("FileReader result is not a string".into()))
                });
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(result);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_error = {
        let reply = reply.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            if let Some(tx) = reply.borrow_mut().take() {
                let _ = tx.send(Err(Error::FileRead("FileReader failed".into())));
            }
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(read_error)?;

    let result = rx
        .await
        .map_err(|_| Error::FileRead("FileReader was dropped".into()))?;

    reader.set_onload(None);
    reader.set_onerror(None);
    result
}

fn read_error(value: JsValue) -> Error {
    Error::FileRead(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use recycle_me_common::build_payload;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(content: &str, name: &str, mime: &str) -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let opts = web_sys::FilePropertyBag::new();
        opts.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &opts).expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    async fn test_read_as_data_url() {
        let file = make_file("hello", "hello.png", "image/png");
        let data_url = read_as_data_url(&file).await.unwrap();
        assert_eq!(data_url, "data:image/png;base64,aGVsbG8=");
    }

    #[wasm_bindgen_test]
    fn test_browser_image_metadata() {
        let image = BrowserImage::new(make_file("hello", "bottle.png", "image/png"));
        let file = image.file();
        assert_eq!(file.name, "bottle.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size, 5);
    }

    #[wasm_bindgen_test]
    async fn test_zero_byte_file_has_no_payload() {
        let image = BrowserImage::new(make_file("", "empty.jpg", "image/jpeg"));
        let data_url = image.read_data_url().await.unwrap();
        assert!(build_payload(&data_url, "image/jpeg").is_err());
    }
}
